use std::fmt;

use thiserror::Error;

/// Names the piece of the request head an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The request line as a whole, before any field byte was seen
    RequestLine,
    /// The method token of the request line
    Method,
    /// The uri token of the request line
    Uri,
    /// The protocol token of the request line
    Protocol,
    /// A header field name
    HeaderName,
    /// A header field value
    HeaderValue,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RequestLine => "request line",
            Self::Method => "method",
            Self::Uri => "uri",
            Self::Protocol => "protocol",
            Self::HeaderName => "header name",
            Self::HeaderValue => "header value",
        };
        f.write_str(name)
    }
}

/// The two fatal conditions of head decoding.
///
/// Both abort the record currently being decoded. [`FieldTooLong`] is a
/// protocol violation / resource limit, [`UnexpectedEof`] a connection
/// failure; read errors on the underlying source are reported as the
/// latter, a failed refill is not distinguished from "no more data" at
/// this layer.
///
/// [`FieldTooLong`]: ParseError::FieldTooLong
/// [`UnexpectedEof`]: ParseError::UnexpectedEof
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{field} exceeds the size limit {limit}")]
    FieldTooLong { field: FieldKind, limit: usize },

    #[error("stream ended while reading {field}")]
    UnexpectedEof { field: FieldKind },
}

impl ParseError {
    pub fn field_too_long(field: FieldKind, limit: usize) -> Self {
        Self::FieldTooLong { field, limit }
    }

    pub fn unexpected_eof(field: FieldKind) -> Self {
        Self::UnexpectedEof { field }
    }
}
