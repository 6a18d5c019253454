//! A blocking incremental HTTP/1.x request head reader
//!
//! This crate parses the start-line and header fields of an HTTP/1.x
//! request directly from a raw, unbuffered byte source, one byte at a
//! time, without materializing the whole request in memory. It handles
//! framing only: line and field boundaries, header folding, name case
//! normalization, bounded buffer growth and strict error signaling on
//! malformed or truncated input.
//!
//! # Features
//!
//! - Incremental decoding over any blocking byte source
//! - Fixed-capacity refill buffer, no unbounded reads
//! - Caller-owned, recyclable output records (zero allocation per request
//!   after warm-up)
//! - Bounded field growth with hard per-field maxima
//! - HTTP/0.9 start lines and header folding
//! - Exactly two fatal error kinds: field too long, truncated stream
//!
//! # Example
//!
//! ```no_run
//! use std::net::TcpListener;
//!
//! use micro_http_reader::codec::RequestDecoder;
//! use micro_http_reader::protocol::{HeaderField, ParseError, RequestLine};
//! use tracing::{error, info};
//!
//! fn main() -> std::io::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080")?;
//!
//!     loop {
//!         let (stream, _remote_addr) = listener.accept()?;
//!         let mut decoder = RequestDecoder::new(stream);
//!
//!         if let Err(e) = dump_head(&mut decoder) {
//!             error!(cause = %e, "bad request head");
//!         }
//!         decoder.close();
//!     }
//! }
//!
//! fn dump_head(decoder: &mut RequestDecoder<std::net::TcpStream>) -> Result<(), ParseError> {
//!     let mut line = RequestLine::new();
//!     decoder.decode_request_line(&mut line)?;
//!     info!(
//!         method = %String::from_utf8_lossy(line.method()),
//!         uri = %String::from_utf8_lossy(line.uri()),
//!         "request line"
//!     );
//!
//!     let mut header = HeaderField::new();
//!     loop {
//!         decoder.decode_header(&mut header)?;
//!         if header.is_blank() {
//!             return Ok(());
//!         }
//!         info!(
//!             name = %String::from_utf8_lossy(header.name()),
//!             value = %String::from_utf8_lossy(header.value()),
//!             "header field"
//!         );
//!     }
//! }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into three modules:
//!
//! - [`stream`]: the transport seam ([`stream::ByteSource`]) and the byte
//!   buffer manager ([`stream::BufferedStream`])
//! - [`protocol`]: caller-owned records ([`protocol::RequestLine`],
//!   [`protocol::HeaderField`]), the bounded-growth field they are made
//!   of, and the error types
//! - [`codec`]: the decoding algorithms ([`codec::RequestDecoder`])
//!
//! # Decoding model
//!
//! The caller drives one [`codec::RequestDecoder`] per connection: decode
//! the request line once, then decode headers until the record reports
//! the blank line ending the header block. Both algorithms sequence
//! through the decoder's single stream cursor, so ordering (request line
//! first, headers in wire order) falls out of ownership rather than
//! convention. The records are supplied by the caller and recycled in
//! place across requests.
//!
//! # Limitations
//!
//! - Request head only; bodies belong to the layer above (the stream, with
//!   any buffered leftover bytes, can be taken back via
//!   [`codec::RequestDecoder::into_stream`])
//! - Header syntax only; no semantic validation
//! - One logical request context per decoder instance; the cursor state is
//!   not safe for concurrent access
//! - Maximum method/protocol size: 1 KiB each; uri: 32 KiB; header name:
//!   128 bytes; header value: 4 KiB

pub mod codec;
pub mod protocol;
pub mod stream;

mod utils;
pub(crate) use utils::ensure;
