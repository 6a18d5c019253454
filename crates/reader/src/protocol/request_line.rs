//! Caller-owned record for one decoded request line.

use crate::protocol::{FieldBuffer, FieldKind};

/// The three tokens of an HTTP/1.x request line.
///
/// The record is supplied by the caller and filled in place by
/// [`RequestDecoder::decode_request_line`]; it carries no behavior beyond
/// [`recycle`]. Each token is a [`FieldBuffer`] with its own initial size
/// and hard maximum.
///
/// An HTTP/0.9 style request has no protocol token; its protocol end
/// offset stays at zero, see [`is_http09`].
///
/// [`RequestDecoder::decode_request_line`]: crate::codec::RequestDecoder::decode_request_line
/// [`recycle`]: RequestLine::recycle
/// [`is_http09`]: RequestLine::is_http09
#[derive(Debug)]
pub struct RequestLine {
    pub(crate) method: FieldBuffer,
    pub(crate) uri: FieldBuffer,
    pub(crate) protocol: FieldBuffer,
}

impl RequestLine {
    pub const INITIAL_METHOD_SIZE: usize = 8;
    pub const MAX_METHOD_SIZE: usize = 1024;

    pub const INITIAL_URI_SIZE: usize = 64;
    pub const MAX_URI_SIZE: usize = 32768;

    pub const INITIAL_PROTOCOL_SIZE: usize = 8;
    pub const MAX_PROTOCOL_SIZE: usize = 1024;

    pub fn new() -> Self {
        Self {
            method: FieldBuffer::new(FieldKind::Method, Self::INITIAL_METHOD_SIZE, Self::MAX_METHOD_SIZE),
            uri: FieldBuffer::new(FieldKind::Uri, Self::INITIAL_URI_SIZE, Self::MAX_URI_SIZE),
            protocol: FieldBuffer::new(FieldKind::Protocol, Self::INITIAL_PROTOCOL_SIZE, Self::MAX_PROTOCOL_SIZE),
        }
    }

    /// Rewinds all three end offsets, readying the record for the next request.
    pub fn recycle(&mut self) {
        self.method.reset();
        self.uri.reset();
        self.protocol.reset();
    }

    pub fn method(&self) -> &[u8] {
        self.method.as_bytes()
    }

    pub fn uri(&self) -> &[u8] {
        self.uri.as_bytes()
    }

    pub fn protocol(&self) -> &[u8] {
        self.protocol.as_bytes()
    }

    /// True when the line carried no protocol token.
    pub fn is_http09(&self) -> bool {
        self.protocol.is_empty()
    }
}

impl Default for RequestLine {
    fn default() -> Self {
        Self::new()
    }
}
