use crate::sequence::{ElementOf, Sequence};

/// Read capability of a stream over a sequence
///
/// A stream walks a borrowed sequence front to back. Reading past the end is
/// not an error: operations answer `None` or `false` so a lexer can branch on
/// the result directly.
///
/// Write access is a separate capability ([`WriteStream`]); a stream type only
/// exposes the operations it implements.
pub trait Stream<'a> {
    /// The sequence this stream reads from
    type Sequence: Sequence + ?Sized + 'a;

    /// Check if no more elements can be read
    fn at_end(&self) -> bool;

    /// Advance and answer the element now under the stream
    ///
    /// Answers `None` once the stream has nothing left to read
    fn next(&mut self) -> Option<ElementOf<Self::Sequence>>;

    /// Answer the next `n` elements as a sub-sequence and move past them
    fn get_next(&mut self, n: usize) -> &'a Self::Sequence;

    /// Advance and answer whether the element read equals `value`
    ///
    /// The stream advances whether or not the element matches
    fn next_match_for(&mut self, value: &ElementOf<Self::Sequence>) -> bool {
        self.next().is_some_and(|element| element == *value)
    }

    /// Call `f` with each element that has not been read yet, in order,
    /// without moving the stream
    fn do_each<F>(&self, f: F)
    where
        F: FnMut(ElementOf<Self::Sequence>);

    /// The whole underlying sequence
    fn contents(&self) -> &'a Self::Sequence;
}

/// Write capability of a stream
pub trait WriteStream {
    type Element;

    /// Store `value` at the next position
    fn next_put(&mut self, value: Self::Element);

    /// Store every element of `values` in order
    fn next_put_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        for value in values {
            self.next_put(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collector {
        written: Vec<char>,
    }

    impl WriteStream for Collector {
        type Element = char;

        fn next_put(&mut self, value: char) {
            self.written.push(value);
        }
    }

    #[test]
    fn test_next_put_all_stores_in_order() {
        let mut sink = Collector {
            written: Vec::new(),
        };
        sink.next_put('a');
        sink.next_put_all("bcd".chars());
        assert_eq!(sink.written, vec!['a', 'b', 'c', 'd']);
    }
}
