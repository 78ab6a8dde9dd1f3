use crate::error::StreamError;
use crate::positionable::PositionableStream;
use crate::sequence::Sequence;
use log::debug;

/// A read-only stream over a borrowed sequence
///
/// This is a [`PositionableStream`] with only the read capability: it
/// implements [`Stream`](crate::Stream) and not
/// [`WriteStream`](crate::WriteStream), so write calls do not compile:
///
/// ```compile_fail
/// use readstream::{ReadStream, WriteStream};
///
/// let mut stream = ReadStream::on("test");
/// stream.next_put('x');
/// ```
///
/// ```
/// use readstream::{ReadStream, Stream};
///
/// let mut stream = ReadStream::on("test");
/// assert_eq!(stream.next(), Some('t'));
/// ```
pub type ReadStream<'a, S> = PositionableStream<'a, S>;

impl<'a, S: Sequence + ?Sized> ReadStream<'a, S> {
    /// Stream over the whole of `sequence`
    pub fn on(sequence: &'a S) -> Self {
        PositionableStream::new(sequence)
    }

    /// Stream over `sequence.slice(from, to)`
    ///
    /// The range is clamped the way [`Sequence::slice`] clamps it.
    pub fn on_range(sequence: &'a S, from: usize, to: usize) -> Self {
        PositionableStream::new(sequence.slice(from, to))
    }

    /// Stream over `from..to` of `sequence`, rejecting inverted or
    /// out-of-bounds ranges instead of clamping them
    pub fn try_on_range(sequence: &'a S, from: usize, to: usize) -> Result<Self, StreamError> {
        let len = sequence.len();
        if from > to || to > len {
            debug!("rejected range {}..{} over {} elements", from, to, len);
            return Err(StreamError::RangeOutOfBounds { from, to, len });
        }
        Ok(Self::on_range(sequence, from, to))
    }
}

/// Convenience function to create a ReadStream over a whole sequence
pub fn stream_on<S: Sequence + ?Sized>(sequence: &S) -> ReadStream<'_, S> {
    ReadStream::on(sequence)
}

/// Convenience function to create a ReadStream over part of a sequence
pub fn stream_on_range<S: Sequence + ?Sized>(
    sequence: &S,
    from: usize,
    to: usize,
) -> ReadStream<'_, S> {
    ReadStream::on_range(sequence, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positionable::VIRGIN;
    use crate::stream::Stream;

    #[test]
    fn test_on_whole_sequence() {
        let stream = ReadStream::on("fdkaflfakfklafdl");
        assert_eq!(stream.contents(), "fdkaflfakfklafdl");
        assert_eq!(stream.position(), VIRGIN);
    }

    #[test]
    fn test_on_range() {
        assert_eq!(stream_on_range("test", 0, 1).contents(), "t");
        assert_eq!(stream_on_range("test", 0, 4).contents(), "test");
        assert_eq!(stream_on_range("test", 0, 3).contents(), "tes");
        assert_eq!(stream_on_range("test", 0, 2).contents(), "te");
        assert_eq!(stream_on_range("test", 1, 3).position(), VIRGIN);
    }

    #[test]
    fn test_on_range_clamps() {
        assert_eq!(stream_on_range("test", 2, 10).contents(), "st");
        assert!(stream_on_range("test", 3, 1).is_empty());
    }

    #[test]
    fn test_try_on_range() {
        let stream = ReadStream::try_on_range("test", 1, 3).unwrap();
        assert_eq!(stream.contents(), "es");

        let result = ReadStream::try_on_range("test", 2, 9);
        assert_eq!(
            result.unwrap_err(),
            StreamError::RangeOutOfBounds {
                from: 2,
                to: 9,
                len: 4
            }
        );

        assert!(ReadStream::try_on_range("test", 3, 1).is_err());
        assert!(ReadStream::try_on_range("test", 4, 4).unwrap().is_empty());
    }

    #[test]
    fn test_stream_on_tokens() {
        #[derive(Debug, Clone, PartialEq)]
        enum Token {
            Ident(&'static str),
            Comma,
            Semi,
        }

        let tokens = vec![
            Token::Ident("a"),
            Token::Comma,
            Token::Ident("b"),
            Token::Semi,
        ];
        let mut stream = stream_on(tokens.as_slice());

        assert_eq!(stream.up_to(&Token::Semi), tokens[..3].to_vec());
        assert!(stream.peek().is_none());
        assert_eq!(stream.position(), 3);
    }
}
