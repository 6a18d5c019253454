//! Buffered cursor over a blocking byte source.
//!
//! This is the byte buffer manager of the reader: a fixed-capacity buffer
//! refilled on demand, exposing single-byte read and peek primitives. Both
//! decode algorithms of [`RequestDecoder`] pull bytes through one instance
//! of this type, so field and call boundaries never realign the buffer;
//! leftover bytes simply flow into the next read.
//!
//! [`RequestDecoder`]: crate::codec::RequestDecoder

use tracing::trace;

use crate::stream::ByteSource;

/// Default capacity of the internal refill buffer.
pub const DEFAULT_BUFFER_SIZE: usize = 2048;

/// A fixed-capacity buffer with a fill watermark and a cursor.
///
/// Invariant: `0 <= pos <= count <= capacity`. When `pos == count` the
/// buffer is exhausted and the next read performs one bounded blocking
/// read on the source. End of stream is a sentinel (`None`), not an
/// error; the decoders escalate it where a line is incomplete.
///
/// Lookahead is an explicit [`peek_byte`] / [`consume`] pair; the cursor
/// never moves backward.
///
/// [`peek_byte`]: BufferedStream::peek_byte
/// [`consume`]: BufferedStream::consume
#[derive(Debug)]
pub struct BufferedStream<S> {
    source: Option<S>,
    buf: Box<[u8]>,
    pos: usize,
    count: usize,
}

impl<S: ByteSource> BufferedStream<S> {
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(source: S, capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self { source: Some(source), buf: vec![0; capacity].into_boxed_slice(), pos: 0, count: 0 }
    }

    /// Returns the next byte, advancing the cursor.
    ///
    /// `None` is the end-of-stream sentinel.
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.pos += 1;
        Some(byte)
    }

    /// Returns the next byte without advancing the cursor, refilling first
    /// if the buffer is exhausted.
    pub fn peek_byte(&mut self) -> Option<u8> {
        if self.pos == self.count && !self.fill() {
            return None;
        }
        Some(self.buf[self.pos])
    }

    /// Advances past a byte previously returned by [`peek_byte`].
    ///
    /// [`peek_byte`]: BufferedStream::peek_byte
    pub fn consume(&mut self) {
        debug_assert!(self.pos < self.count);
        self.pos += 1;
    }

    /// Unread buffered bytes plus whatever the source reports readable
    /// without blocking.
    pub fn available(&self) -> usize {
        (self.count - self.pos) + self.source.as_ref().map_or(0, ByteSource::available)
    }

    /// Closes the underlying source and releases the buffer.
    ///
    /// Idempotent; subsequent reads report end of stream.
    pub fn close(&mut self) {
        if let Some(mut source) = self.source.take() {
            if let Err(e) = source.close() {
                trace!(cause = %e, "closing byte source failed");
            }
            self.buf = Box::default();
            self.pos = 0;
            self.count = 0;
        }
    }

    /// One bounded read from the source into the whole buffer.
    ///
    /// A read error is not distinguished from end of stream here.
    fn fill(&mut self) -> bool {
        self.pos = 0;
        self.count = 0;
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        match source.read_into(&mut self.buf) {
            Ok(n) => {
                trace!(filled = n, "refilled stream buffer");
                self.count = n;
            }
            Err(e) => {
                trace!(cause = %e, "refill failed, treating as end of stream");
            }
        }
        self.count > 0
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::io::Cursor;

    use super::*;

    /// Source that fails every read, for the error-as-eof contract.
    struct BrokenSource;

    impl ByteSource for BrokenSource {
        fn read_into(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    fn stream_over(bytes: &[u8], capacity: usize) -> BufferedStream<Cursor<Vec<u8>>> {
        BufferedStream::with_capacity(Cursor::new(bytes.to_vec()), capacity)
    }

    #[test]
    fn reads_across_refills_without_loss() {
        let mut stream = stream_over(b"hello world", 3);

        let mut out = Vec::new();
        while let Some(byte) = stream.read_byte() {
            out.push(byte);
        }

        assert_eq!(out, b"hello world");
        assert!(stream.read_byte().is_none());
    }

    #[test]
    fn peek_does_not_advance() {
        let mut stream = stream_over(b"ab", 2);

        assert_eq!(stream.peek_byte(), Some(b'a'));
        assert_eq!(stream.peek_byte(), Some(b'a'));
        assert_eq!(stream.read_byte(), Some(b'a'));

        assert_eq!(stream.peek_byte(), Some(b'b'));
        stream.consume();
        assert_eq!(stream.peek_byte(), None);
    }

    #[test]
    fn peek_refills_at_buffer_boundary() {
        let mut stream = stream_over(b"ab", 1);

        assert_eq!(stream.read_byte(), Some(b'a'));
        // buffer drained, the peek must trigger a refill
        assert_eq!(stream.peek_byte(), Some(b'b'));
        stream.consume();
        assert_eq!(stream.read_byte(), None);
    }

    #[test]
    fn available_counts_buffered_and_source_bytes() {
        let mut stream = stream_over(b"abcdef", 4);
        assert_eq!(stream.available(), 6);

        assert_eq!(stream.read_byte(), Some(b'a'));
        // 3 buffered + 2 still in the source
        assert_eq!(stream.available(), 5);
    }

    #[test]
    fn close_is_idempotent_and_ends_the_stream() {
        let mut stream = stream_over(b"abc", 4);
        assert_eq!(stream.read_byte(), Some(b'a'));

        stream.close();
        stream.close();

        assert_eq!(stream.read_byte(), None);
        assert_eq!(stream.available(), 0);
    }

    #[test]
    fn read_error_reports_end_of_stream() {
        let mut stream = BufferedStream::with_capacity(BrokenSource, 4);
        assert!(stream.read_byte().is_none());
        assert!(stream.peek_byte().is_none());
    }
}
