//! Error types for color literal recognition.
//!
//! Malformed literals are never reported on their own: a token that looks like
//! a color but has the wrong arity or unparsable arguments is rejected and the
//! caller sees [`ParseError::NoLiteralFound`], exactly as if nothing were there.

use thiserror::Error;

/// Errors returned by [`parse`](crate::parse).
///
/// # Examples
///
/// ```rust
/// use colorexpr::{parse, ParseError};
///
/// assert_eq!(
///     parse("nothing here", 3),
///     Err(ParseError::NoLiteralFound { offset: 3 })
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No complete color literal touches the offset.
    #[error("no color literal at offset {offset}")]
    NoLiteralFound { offset: usize },

    /// The offset lies past the end of the line.
    #[error("offset {offset} is outside a line of {len} characters")]
    OffsetOutOfRange { offset: usize, len: usize },
}
