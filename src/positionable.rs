use crate::error::StreamError;
use crate::sequence::{ElementOf, Sequence};
use crate::stream::Stream;
use log::{debug, trace};

/// Position of a stream that has not read anything yet
pub const VIRGIN: isize = -1;

/// A stream that keeps a movable position reference into a borrowed sequence
///
/// The position is a reference into the sequence: the next read answers the
/// element at `position + 1`. Reading with `next` leaves it on the element just
/// read; `get_next` leaves it on the end of the slice it answered. It ranges
/// over `-1..=len`: `-1` means nothing has been read yet and `len` is the end
/// sentinel, reached once the stream has moved past the last element. Every
/// operation keeps the position inside that range.
///
/// Alongside the position the stream keeps the storage offset of the element
/// at `position + 1`, so reading element by element never searches the
/// sequence from its start.
///
/// Streams are `Copy`. A saved copy is an independent mark: reading from the
/// original never moves the copy, so a lexer can backtrack by resuming from it.
#[derive(Debug)]
pub struct PositionableStream<'a, S: Sequence + ?Sized> {
    sequence: &'a S,
    position: isize,
    len: usize,
    /// Storage offset of the element at `position + 1`
    offset: usize,
}

impl<'a, S: Sequence + ?Sized> Clone for PositionableStream<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: Sequence + ?Sized> Copy for PositionableStream<'a, S> {}

impl<'a, S: Sequence + ?Sized> PositionableStream<'a, S> {
    pub(crate) fn new(sequence: &'a S) -> Self {
        PositionableStream {
            sequence,
            position: VIRGIN,
            len: sequence.len(),
            offset: 0,
        }
    }

    fn end(&self) -> isize {
        self.len as isize
    }

    /// Store `position` and resolve the offset of the element after it
    fn move_to(&mut self, position: isize) {
        if position == self.position + 1 {
            if let Some((_, following)) = self.sequence.element_at_offset(self.offset) {
                self.offset = following;
            }
        } else {
            self.offset = self.sequence.offset_of((position + 1) as usize);
        }
        self.position = position;
    }

    /// Current position reference, `-1` before the first read
    ///
    /// After `next` this is the index of the element just read; after
    /// `get_next` it is the end of the answered slice.
    pub fn position(&self) -> isize {
        self.position
    }

    /// Check if the underlying sequence has no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Answer the element the next read would return, without moving
    pub fn peek(&self) -> Option<ElementOf<S>> {
        if self.at_end() {
            return None;
        }
        self.sequence
            .element_at_offset(self.offset)
            .map(|(element, _)| element)
    }

    /// Answer the element under the position reference
    ///
    /// `None` before the first read or at the end. After `next` this is the
    /// element just read; after `get_next` it is the element at the end of the
    /// answered slice, which `get_next` did not include.
    pub fn current(&self) -> Option<ElementOf<S>> {
        if self.position < 0 || self.position >= self.end() {
            return None;
        }
        self.sequence.element_before_offset(self.offset)
    }

    /// Move past the next element if it equals `value`
    ///
    /// Answers whether it did; the position is unchanged on a mismatch
    pub fn peek_for(&mut self, value: &ElementOf<S>) -> bool {
        if self.at_end() {
            return false;
        }
        match self.sequence.element_at_offset(self.offset) {
            Some((element, following)) if element == *value => {
                self.position += 1;
                self.offset = following;
                true
            }
            _ => false,
        }
    }

    /// Read up to the next element equal to `value` and answer what came before it
    ///
    /// The matching element is consumed but not included. If `value` never
    /// shows up the rest of the sequence is answered and the stream ends up at
    /// the end sentinel.
    pub fn up_to(&mut self, value: &ElementOf<S>) -> S::Owned {
        let mut collected = Vec::new();

        while !self.at_end() {
            match self.next() {
                Some(element) if element == *value => break,
                Some(element) => collected.push(element),
                None => {}
            }
        }

        collected.into_iter().collect()
    }

    /// Read and answer everything from the current position to the end
    pub fn up_to_end(&mut self) -> S::Owned {
        let mut collected = Vec::new();

        while !self.at_end() {
            if let Some(element) = self.next() {
                collected.push(element);
            }
        }

        collected.into_iter().collect()
    }

    /// Reserved; always answers `None`
    pub fn reverse_contents(&self) -> Option<S::Owned> {
        None
    }

    /// Move to `position` if it lies within `-1..=len`
    ///
    /// Answers the new position, or `None` (leaving the stream where it was)
    /// when `position` is out of range.
    pub fn set_position(&mut self, position: isize) -> Option<isize> {
        if (VIRGIN..=self.end()).contains(&position) {
            self.move_to(position);
            return Some(position);
        }
        trace!(
            "rejected position {} outside -1..={}",
            position,
            self.end()
        );
        None
    }

    /// Move back before the first element
    pub fn reset(&mut self) {
        self.position = VIRGIN;
        self.offset = 0;
    }

    /// Move to the end sentinel
    pub fn set_to_end(&mut self) {
        self.move_to(self.end());
    }

    /// Move by `n` elements, stopping at the end sentinel when that would
    /// leave the sequence
    ///
    /// Negative `n` moves backwards; moving back past the start also lands on
    /// the end sentinel.
    pub fn skip(&mut self, n: isize) {
        let target = self.position.checked_add(n);
        if target.and_then(|target| self.set_position(target)).is_none() {
            debug!(
                "skip({}) from {} leaves the sequence, moving to end",
                n, self.position
            );
            self.set_to_end();
        }
    }

    /// Read up to the next element equal to `value`, then skip one more
    ///
    /// Answers whether `value` was found. Elements read during a failed search
    /// stay consumed.
    pub fn skip_to(&mut self, value: &ElementOf<S>) -> bool {
        while !self.at_end() {
            if self.next().is_some_and(|element| element == *value) {
                self.skip(1);
                return true;
            }
        }

        false
    }

    /// The part of the sequence that has not been read yet
    pub fn remaining(&self) -> &'a S {
        let start = (self.position + 1).max(0) as usize;
        self.sequence.slice(start, self.len)
    }

    /// Read the next element, failing without moving when nothing is left
    pub fn try_next(&mut self) -> Result<ElementOf<S>, StreamError> {
        let saved = *self;
        match self.next() {
            Some(element) => Ok(element),
            None => {
                *self = saved;
                Err(StreamError::EndOfStream {
                    position: saved.position,
                })
            }
        }
    }
}

impl<'a, S: Sequence + ?Sized> Stream<'a> for PositionableStream<'a, S> {
    type Sequence = S;

    fn at_end(&self) -> bool {
        self.position == self.end()
    }

    fn next(&mut self) -> Option<ElementOf<S>> {
        if self.at_end() {
            return None;
        }
        self.position += 1;
        let (element, following) = self.sequence.element_at_offset(self.offset)?;
        self.offset = following;
        Some(element)
    }

    fn get_next(&mut self, n: usize) -> &'a S {
        let start = self.position.max(0) as usize;
        let stop = start.saturating_add(n);
        if stop > self.len {
            trace!("get_next({}) from {} clamped to {}", n, start, self.len);
        }

        self.move_to(stop.min(self.len) as isize);
        self.sequence.slice(start, stop)
    }

    fn do_each<F>(&self, mut f: F)
    where
        F: FnMut(ElementOf<S>),
    {
        for element in self.remaining().elements() {
            f(element);
        }
    }

    fn contents(&self) -> &'a S {
        self.sequence
    }
}
