use thiserror::Error;

/// Errors raised by the fallible stream operations
///
/// The core navigation operations never fail: running off either end of the
/// sequence answers `None` or `false`. Only the `try_*` operations, which a
/// caller uses when running out of input is a real error, produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Unexpected end of stream after position {position}")]
    EndOfStream { position: isize },

    #[error("Range {from}..{to} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds { from: usize, to: usize, len: usize },
}

impl StreamError {
    /// Returns the position where this error occurred
    ///
    /// Range starts beyond `isize::MAX` saturate.
    pub fn position(&self) -> isize {
        match self {
            StreamError::EndOfStream { position } => *position,
            StreamError::RangeOutOfBounds { from, .. } => {
                isize::try_from(*from).unwrap_or(isize::MAX)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_stream_display() {
        let error = StreamError::EndOfStream { position: 3 };
        let display_str = error.to_string();
        assert!(display_str.contains("Unexpected end of stream"));
        assert!(display_str.contains('3'));
        assert_eq!(error.position(), 3);
    }

    #[test]
    fn test_range_display() {
        let error = StreamError::RangeOutOfBounds {
            from: 2,
            to: 9,
            len: 4,
        };
        assert_eq!(
            error.to_string(),
            "Range 2..9 is out of bounds for a sequence of length 4"
        );
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_range_position_saturates() {
        let error = StreamError::RangeOutOfBounds {
            from: usize::MAX,
            to: usize::MAX,
            len: 4,
        };
        assert_eq!(error.position(), isize::MAX);
    }
}
