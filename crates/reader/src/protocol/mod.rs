//! Records and error types of the request head.
//!
//! This module provides the data side of head decoding: the caller-owned
//! records the decoder fills, the bounded-growth field they are made of,
//! and the error taxonomy.
//!
//! # Architecture
//!
//! - **Fields** ([`field`]): [`FieldBuffer`], one growth discipline shared
//!   by every decoded token
//! - **Records** ([`request_line`], [`header`]): [`RequestLine`] and
//!   [`HeaderField`], plain mutable records with a recycle operation
//! - **Errors** ([`error`]): [`ParseError`] with its two fatal kinds, and
//!   [`FieldKind`] naming the field an error refers to
//!
//! Ownership: records are supplied per decode call and mutated in place;
//! the decoder never keeps them. Recycling a record rewinds its end
//! offsets only, so grown capacity is carried over to the next request.

mod error;
pub use error::FieldKind;
pub use error::ParseError;

mod field;
pub use field::FieldBuffer;

mod request_line;
pub use request_line::RequestLine;

mod header;
pub use header::HeaderField;
