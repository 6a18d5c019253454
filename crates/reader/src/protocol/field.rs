//! Bounded-growth output field used by every decoded token of the request head.
//!
//! Method, uri, protocol, header name and header value all share the same
//! growth discipline: start small, double when exhausted, fail hard at a
//! per-field maximum. [`FieldBuffer`] implements that discipline once.

use crate::ensure;
use crate::protocol::{FieldKind, ParseError};

/// A growable byte field with an end offset and a hard size limit.
///
/// The backing store is over-allocated; only the `..end` prefix holds
/// decoded bytes. [`reset`] rewinds the end offset without shrinking the
/// store, so a recycled field reuses its grown capacity for the next
/// request.
///
/// [`reset`]: FieldBuffer::reset
#[derive(Debug)]
pub struct FieldBuffer {
    kind: FieldKind,
    buf: Vec<u8>,
    end: usize,
    limit: usize,
}

impl FieldBuffer {
    pub(crate) fn new(kind: FieldKind, initial_size: usize, limit: usize) -> Self {
        debug_assert!(initial_size > 0 && initial_size <= limit);
        Self { kind, buf: vec![0; initial_size], end: 0, limit }
    }

    /// Appends one byte, doubling the backing store when it is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::FieldTooLong`] when the store is already at
    /// the hard limit and full.
    pub(crate) fn push(&mut self, byte: u8) -> Result<(), ParseError> {
        if self.end == self.buf.len() {
            self.grow()?;
        }
        self.buf[self.end] = byte;
        self.end += 1;
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ParseError> {
        ensure!(self.buf.len() < self.limit, ParseError::field_too_long(self.kind, self.limit));
        let new_size = usize::min(self.buf.len() * 2, self.limit);
        self.buf.resize(new_size, 0);
        Ok(())
    }

    /// Rewinds the end offset to zero. Capacity is retained.
    pub fn reset(&mut self) {
        self.end = 0;
    }

    /// The decoded bytes, i.e. the `..end` prefix of the backing store.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.end]
    }

    /// The end offset: number of decoded bytes.
    pub fn len(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// The hard maximum this field may grow to.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_field() -> FieldBuffer {
        FieldBuffer::new(FieldKind::Method, 4, 16)
    }

    #[test]
    fn push_doubles_until_limit() {
        let mut field = tiny_field();
        for byte in 0..16u8 {
            field.push(byte).unwrap();
        }

        assert_eq!(field.len(), 16);
        assert_eq!(field.as_bytes(), (0..16u8).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn push_past_limit_is_field_too_long() {
        let mut field = tiny_field();
        for byte in 0..16u8 {
            field.push(byte).unwrap();
        }

        let err = field.push(16).unwrap_err();
        assert!(matches!(err, ParseError::FieldTooLong { field: FieldKind::Method, limit: 16 }));
    }

    #[test]
    fn growth_is_lossless() {
        let mut field = FieldBuffer::new(FieldKind::Uri, 2, 64);
        let input: Vec<u8> = (b'a'..=b'z').collect();
        for &byte in &input {
            field.push(byte).unwrap();
        }

        assert_eq!(field.as_bytes(), input.as_slice());
    }

    #[test]
    fn reset_rewinds_end_offset_only() {
        let mut field = tiny_field();
        for byte in b"abcdef" {
            field.push(*byte).unwrap();
        }

        field.reset();
        assert!(field.is_empty());
        assert_eq!(field.as_bytes(), b"");

        field.push(b'x').unwrap();
        assert_eq!(field.as_bytes(), b"x");
    }
}
