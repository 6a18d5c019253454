//! Decoding of the HTTP/1.x request head.
//!
//! The decoder reads the start-line and header fields incrementally from a
//! blocking byte source, one byte at a time, without materializing the
//! whole request. Syntax and framing only: line and field boundaries,
//! header folding, name case normalization. Header semantics, bodies and
//! connection lifecycle belong to the layers above.
//!
//! # Architecture
//!
//! - [`RequestDecoder`]: owns the [`BufferedStream`] both algorithms
//!   sequence through
//! - Request-line decoding in [`request_line`](self), header-field
//!   decoding in [`header`](self); both are `impl` blocks on the decoder
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use micro_http_reader::codec::RequestDecoder;
//! use micro_http_reader::protocol::{HeaderField, RequestLine};
//!
//! let head = "GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n";
//! let mut decoder = RequestDecoder::new(Cursor::new(head));
//!
//! let mut line = RequestLine::new();
//! decoder.decode_request_line(&mut line).unwrap();
//! assert_eq!(line.uri(), b"/index.html");
//!
//! let mut header = HeaderField::new();
//! decoder.decode_header(&mut header).unwrap();
//! assert_eq!(header.name(), b"host");
//!
//! decoder.decode_header(&mut header).unwrap();
//! assert!(header.is_blank());
//! ```

mod header;
mod request_line;

use crate::protocol::{FieldKind, ParseError};
use crate::stream::{BufferedStream, ByteSource};

pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';
pub(crate) const SP: u8 = b' ';
pub(crate) const HT: u8 = b'\t';
pub(crate) const COLON: u8 = b':';

/// Decoder for the head of an HTTP/1.x request.
///
/// Call [`decode_request_line`] once per request, then [`decode_header`]
/// until the record [`is_blank`]. Both algorithms consume bytes through
/// the same stream cursor, so the request line is fully decoded before
/// headers begin and headers come out in wire order.
///
/// [`decode_request_line`]: RequestDecoder::decode_request_line
/// [`decode_header`]: RequestDecoder::decode_header
/// [`is_blank`]: crate::protocol::HeaderField::is_blank
#[derive(Debug)]
pub struct RequestDecoder<S> {
    stream: BufferedStream<S>,
}

impl<S: ByteSource> RequestDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { stream: BufferedStream::new(source) }
    }

    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self { stream: BufferedStream::with_capacity(source, capacity) }
    }

    pub fn from_stream(stream: BufferedStream<S>) -> Self {
        Self { stream }
    }

    /// Hands the stream back, with any bytes buffered past the head still
    /// unread. The layer reading the request body starts from here.
    pub fn into_stream(self) -> BufferedStream<S> {
        self.stream
    }

    /// See [`BufferedStream::available`].
    pub fn available(&self) -> usize {
        self.stream.available()
    }

    /// See [`BufferedStream::close`].
    pub fn close(&mut self) {
        self.stream.close();
    }

    pub(crate) fn next_byte(&mut self, field: FieldKind) -> Result<u8, ParseError> {
        self.stream.read_byte().ok_or_else(|| ParseError::unexpected_eof(field))
    }
}
