//! Header-field decoding.
//!
//! One call decodes one field: name up to the colon (lowercased), then the
//! value, which may span several physical lines when continuation lines
//! start with whitespace (folding). A bare line terminator where a field
//! was expected is the blank line ending the header block and leaves both
//! end offsets at zero.

use tracing::trace;

use crate::codec::{COLON, CR, HT, LF, RequestDecoder, SP};
use crate::protocol::{FieldKind, HeaderField, ParseError};
use crate::stream::ByteSource;

impl<S: ByteSource> RequestDecoder<S> {
    /// Decodes one header field into `header`.
    ///
    /// A record showing a non-zero name end offset is recycled first. When
    /// the blank line ending the header block is read instead of a field,
    /// both end offsets are left at zero and no error is raised; check
    /// with [`HeaderField::is_blank`].
    ///
    /// # Errors
    ///
    /// [`ParseError::UnexpectedEof`] when the stream ends before the field
    /// is complete, [`ParseError::FieldTooLong`] when name or value
    /// outgrows its hard maximum.
    pub fn decode_header(&mut self, header: &mut HeaderField) -> Result<(), ParseError> {
        if !header.name.is_empty() {
            header.recycle();
        }

        // a bare line terminator here is the blank line ending the block
        let first = self.next_byte(FieldKind::HeaderName)?;
        if first == CR || first == LF {
            if first == CR && self.stream.peek_byte() == Some(LF) {
                self.stream.consume();
            }
            header.name.reset();
            header.value.reset();
            return Ok(());
        }

        // name: bytes up to the colon, folded to lowercase; the colon is
        // consumed and not stored
        let mut byte = first;
        while byte != COLON {
            header.name.push(byte.to_ascii_lowercase())?;
            byte = self.next_byte(FieldKind::HeaderName)?;
        }

        // value: one physical line per iteration; a following line that
        // starts with whitespace continues the value, joined by a single
        // space
        loop {
            self.skip_leading_whitespace()?;

            loop {
                let byte = self.next_byte(FieldKind::HeaderValue)?;
                match byte {
                    CR => {}
                    LF => break,
                    _ => header.value.push(byte)?,
                }
            }

            match self.stream.peek_byte() {
                // folded continuation; the peeked byte is left for the
                // whitespace skip of the next iteration
                Some(SP | HT) => header.value.push(SP)?,
                Some(_) => break,
                None => return Err(ParseError::unexpected_eof(FieldKind::HeaderValue)),
            }
        }

        trace!(name_len = header.name.len(), value_len = header.value.len(), "decoded header field");
        Ok(())
    }

    /// Skips the SP/HT run at the start of a value line. Only leading
    /// whitespace is stripped, internal and trailing whitespace stays.
    fn skip_leading_whitespace(&mut self) -> Result<(), ParseError> {
        loop {
            match self.stream.peek_byte() {
                Some(SP | HT) => self.stream.consume(),
                Some(_) => return Ok(()),
                None => return Err(ParseError::unexpected_eof(FieldKind::HeaderValue)),
            }
        }
    }
}
