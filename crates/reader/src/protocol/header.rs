//! Caller-owned record for one decoded header field.

use crate::protocol::{FieldBuffer, FieldKind};

/// One header field of an HTTP/1.x request head.
///
/// Filled in place by [`RequestDecoder::decode_header`]. The name is
/// lowercased during decoding, so lookups never need case folding. After a
/// decode that hit the blank line ending the header block, both end
/// offsets are zero, see [`is_blank`].
///
/// [`RequestDecoder::decode_header`]: crate::codec::RequestDecoder::decode_header
/// [`is_blank`]: HeaderField::is_blank
#[derive(Debug)]
pub struct HeaderField {
    pub(crate) name: FieldBuffer,
    pub(crate) value: FieldBuffer,
}

impl HeaderField {
    pub const INITIAL_NAME_SIZE: usize = 32;
    pub const MAX_NAME_SIZE: usize = 128;

    pub const INITIAL_VALUE_SIZE: usize = 64;
    pub const MAX_VALUE_SIZE: usize = 4096;

    pub fn new() -> Self {
        Self {
            name: FieldBuffer::new(FieldKind::HeaderName, Self::INITIAL_NAME_SIZE, Self::MAX_NAME_SIZE),
            value: FieldBuffer::new(FieldKind::HeaderValue, Self::INITIAL_VALUE_SIZE, Self::MAX_VALUE_SIZE),
        }
    }

    /// Rewinds both end offsets, readying the record for the next field.
    pub fn recycle(&mut self) {
        self.name.reset();
        self.value.reset();
    }

    /// The field name, lowercased.
    pub fn name(&self) -> &[u8] {
        self.name.as_bytes()
    }

    pub fn value(&self) -> &[u8] {
        self.value.as_bytes()
    }

    /// True when the last decode read the blank line ending the header
    /// block instead of a field.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.value.is_empty()
    }
}

impl Default for HeaderField {
    fn default() -> Self {
        Self::new()
    }
}
