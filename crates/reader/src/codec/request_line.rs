//! Request-line decoding.
//!
//! Four phases over the shared stream cursor: skip leading line
//! terminators, method, uri, protocol. An HTTP/0.9 style line ends at the
//! uri; the protocol phase is then skipped and the protocol end offset
//! stays at zero.

use tracing::trace;

use crate::codec::{CR, LF, RequestDecoder, SP};
use crate::protocol::{FieldKind, ParseError, RequestLine};
use crate::stream::ByteSource;

impl<S: ByteSource> RequestDecoder<S> {
    /// Decodes one request line into `line`.
    ///
    /// A record showing a non-zero method end offset is recycled first, so
    /// reuse across requests never observes stale bytes.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedEof`] when the stream ends before the line
    /// is complete (including an entirely empty stream), and
    /// [`ParseError::FieldTooLong`] when a token outgrows its hard
    /// maximum.
    pub fn decode_request_line(&mut self, line: &mut RequestLine) -> Result<(), ParseError> {
        if !line.method.is_empty() {
            line.recycle();
        }

        self.skip_line_terminators()?;

        // method: bytes up to the first space, the space is consumed
        loop {
            let byte = self.next_byte(FieldKind::Method)?;
            if byte == SP {
                break;
            }
            line.method.push(byte)?;
        }

        // uri: up to a space, or a bare line terminator for an HTTP/0.9
        // style line without protocol token
        let mut eol = false;
        loop {
            let byte = self.next_byte(FieldKind::Uri)?;
            if byte == SP {
                break;
            }
            if byte == CR || byte == LF {
                eol = true;
                break;
            }
            line.uri.push(byte)?;
        }

        // protocol: rest of the line, CR bytes are discarded
        while !eol {
            let byte = self.next_byte(FieldKind::Protocol)?;
            match byte {
                CR => {}
                LF => eol = true,
                _ => line.protocol.push(byte)?,
            }
        }

        trace!(
            method_len = line.method.len(),
            uri_len = line.uri.len(),
            protocol_len = line.protocol.len(),
            "decoded request line"
        );
        Ok(())
    }

    /// Discards the CR/LF run preceding the line, e.g. left over from a
    /// sloppy client terminating the previous request twice.
    fn skip_line_terminators(&mut self) -> Result<(), ParseError> {
        loop {
            match self.stream.peek_byte() {
                Some(CR | LF) => self.stream.consume(),
                Some(_) => return Ok(()),
                None => return Err(ParseError::unexpected_eof(FieldKind::RequestLine)),
            }
        }
    }
}
