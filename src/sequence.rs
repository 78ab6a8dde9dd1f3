/// An ordered, zero-indexed, finite collection a stream can walk over
///
/// Streams only ever read through this trait, so any indexable and sliceable
/// collection (text, token buffers, byte buffers) can back a stream without
/// being copied.
pub trait Sequence {
    /// The element type; streams only compare elements for equality
    type Element: Clone + PartialEq;

    /// Owned collection that scanned elements are collected into
    ///
    /// For text this is `String`, so scanning a `str` answers strings.
    type Owned: FromIterator<Self::Element>;

    /// Number of elements in the sequence
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `None` when `index >= len()`
    fn element_at(&self, index: usize) -> Option<Self::Element>;

    /// Sub-sequence covering the half-open range `from..to`
    ///
    /// Both bounds are clamped to `len()`; an inverted range answers an empty
    /// sub-sequence.
    fn slice(&self, from: usize, to: usize) -> &Self;

    /// All elements in order
    fn elements(&self) -> impl Iterator<Item = Self::Element> + '_;

    /// Storage offset of the element at `index`
    ///
    /// Indices at or past `len()` map to the end of storage. Streams resolve an
    /// index to an offset once per jump and then walk by offset, so sequences
    /// whose elements have varying widths (UTF-8 text) are read in linear time.
    /// For index-addressed sequences the offset is the index itself.
    fn offset_of(&self, index: usize) -> usize {
        index.min(self.len())
    }

    /// Element stored at `offset` and the offset of the element after it
    fn element_at_offset(&self, offset: usize) -> Option<(Self::Element, usize)> {
        self.element_at(offset).map(|element| (element, offset + 1))
    }

    /// Element stored immediately before `offset`
    fn element_before_offset(&self, offset: usize) -> Option<Self::Element> {
        offset.checked_sub(1).and_then(|index| self.element_at(index))
    }
}

/// Element type of a sequence
pub type ElementOf<S> = <S as Sequence>::Element;

fn clamp_range(from: usize, to: usize, len: usize) -> (usize, usize) {
    let to = to.min(len);
    (from.min(to), to)
}

/// Byte offset of the character at `index`, or `s.len()` past the last one
fn char_offset(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map_or(s.len(), |(offset, _)| offset)
}

// Characters are addressed by character index, not byte offset, so positions
// stay meaningful for non-ASCII text. Index lookups walk the string from the
// start; offset lookups are constant time.
impl Sequence for str {
    type Element = char;
    type Owned = String;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn element_at(&self, index: usize) -> Option<char> {
        self.chars().nth(index)
    }

    fn slice(&self, from: usize, to: usize) -> &str {
        let to = char_offset(self, to);
        let from = char_offset(self, from).min(to);
        &self[from..to]
    }

    fn elements(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }

    fn offset_of(&self, index: usize) -> usize {
        char_offset(self, index)
    }

    fn element_at_offset(&self, offset: usize) -> Option<(char, usize)> {
        let ch = self.get(offset..)?.chars().next()?;
        Some((ch, offset + ch.len_utf8()))
    }

    fn element_before_offset(&self, offset: usize) -> Option<char> {
        self.get(..offset)?.chars().next_back()
    }
}

impl<T: Clone + PartialEq> Sequence for [T] {
    type Element = T;
    type Owned = Vec<T>;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element_at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }

    fn slice(&self, from: usize, to: usize) -> &[T] {
        let (from, to) = clamp_range(from, to, <[T]>::len(self));
        &self[from..to]
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().cloned()
    }
}
