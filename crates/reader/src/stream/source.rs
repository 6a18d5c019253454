//! The transport seam: anything that can feed bytes to a [`BufferedStream`].
//!
//! [`BufferedStream`]: crate::stream::BufferedStream

use std::io;
use std::io::Read;
use std::net::{Shutdown, TcpStream};

/// A blocking byte source.
///
/// The reader sits directly above a raw byte channel; no framing,
/// encryption or multiplexing is assumed. Implementors provide one
/// bounded blocking read, an availability hint, and a close operation
/// that must fail any in-flight blocking read on the same source.
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes in one blocking call.
    ///
    /// `Ok(0)` means end of stream.
    ///
    /// # Errors
    ///
    /// Returns the transport's error. The buffered layer does not
    /// distinguish a failed read from end of stream.
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Bytes readable right now without blocking.
    ///
    /// This is a hint; transports that cannot report it return 0.
    fn available(&self) -> usize {
        0
    }

    /// Releases the transport.
    ///
    /// # Errors
    ///
    /// Returns the transport's error; the stream treats the source as
    /// closed either way.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ByteSource for TcpStream {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }

    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

/// In-memory source, exact `available` reporting. The test and benchmark
/// transport.
impl<T: AsRef<[u8]>> ByteSource for io::Cursor<T> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }

    fn available(&self) -> usize {
        let len = self.get_ref().as_ref().len() as u64;
        usize::try_from(len.saturating_sub(self.position())).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reports_remaining_bytes() {
        let mut cursor = io::Cursor::new(b"abcdef".to_vec());
        assert_eq!(cursor.available(), 6);

        let mut buf = [0u8; 4];
        assert_eq!(cursor.read_into(&mut buf).unwrap(), 4);
        assert_eq!(cursor.available(), 2);

        assert_eq!(cursor.read_into(&mut buf).unwrap(), 2);
        assert_eq!(cursor.read_into(&mut buf).unwrap(), 0);
        assert_eq!(cursor.available(), 0);
    }
}
