//! Byte transport and buffering.
//!
//! Two pieces live here:
//!
//! - [`ByteSource`]: the transport seam, a blocking "read up to N bytes /
//!   report available / close" interface with impls for `TcpStream` and
//!   in-memory cursors
//! - [`BufferedStream`]: the byte buffer manager, a fixed-capacity buffer
//!   refilled on demand with single-byte read and peek primitives
//!
//! The stream owns the source handle; closing the stream closes the
//! source. One stream instance is driven by exactly one logical request
//! context at a time, its cursor state is not safe for concurrent access.

mod source;
pub use source::ByteSource;

mod buffered;
pub use buffered::BufferedStream;
pub use buffered::DEFAULT_BUFFER_SIZE;
