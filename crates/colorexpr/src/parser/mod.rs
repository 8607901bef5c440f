//! Locating and decoding the color literal under a cursor.
//!
//! [`parse`] is the entry point: given one line of text and a character offset
//! it returns the literal that touches the offset, decoded into a
//! [`ColorExpr`].
//!
//! ## Priority
//!
//! Every position at or before the offset that can start a literal is tried.
//! A literal the cursor sits on beats one whose trailing edge the cursor only
//! touches. After that, grammars win in this order: hex, CSS/QSS functions,
//! QML helpers, GLSL vectors. Within one grammar the tightest span wins.
//!
//! ## Submodules
//!
//! - [`units`]: Numeric arguments and how they map onto channels
//! - [`values`]: Per-notation grammars
//!
//! ## Example
//!
//! ```rust
//! use colorexpr::{parse, ColorFormat, ColorValue, Span};
//!
//! let expr = parse("color: rgba(0, 128, 255, 0.50);", 14).unwrap();
//! assert_eq!(expr.span, Span::new(7, 23));
//! assert_eq!(expr.value, ColorValue::rgba(0, 128, 255, 128));
//! assert_eq!(expr.format, ColorFormat::Rgba);
//! ```

pub mod units;
pub mod values;

pub use crate::parser::values::{Grammar, Literal, parse_literal};

use crate::error::ParseError;
use crate::parser::values::is_ident_char;
use crate::types::{ColorExpr, Span};

/// Finds the color literal touching `offset` in `line`.
///
/// `offset` counts characters, not bytes, and may equal the line length.
/// Malformed literals are skipped, never partially decoded.
pub fn parse(line: &str, offset: usize) -> Result<ColorExpr, ParseError> {
    let len = line.chars().count();
    if offset > len {
        return Err(ParseError::OffsetOutOfRange { offset, len });
    }

    let mut best: Option<(Rank, ColorExpr)> = None;
    let mut prev: Option<char> = None;

    for (char_index, (byte_index, c)) in line.char_indices().enumerate() {
        if char_index > offset {
            break;
        }
        let starts_literal = c == '#' || (c.is_ascii_alphabetic() && !prev.is_some_and(continues_name));
        prev = Some(c);
        if !starts_literal {
            continue;
        }

        let input = &line[byte_index..];
        let Ok((remaining, literal)) = parse_literal(input) else {
            continue;
        };

        let matched = &input[..input.len() - remaining.len()];
        let span = Span::new(char_index, matched.chars().count());
        if !span.contains(offset) {
            log::trace!("literal {matched:?} at {char_index} does not reach offset {offset}");
            continue;
        }

        let rank = Rank {
            at_end: span.end() == offset,
            grammar: literal.grammar,
            len: span.len,
        };
        if best.as_ref().is_none_or(|(current, _)| rank < *current) {
            best = Some((
                rank,
                ColorExpr {
                    span,
                    value: literal.value,
                    format: literal.format,
                },
            ));
        }
    }

    match best {
        Some((_, expr)) => {
            log::debug!(
                "found {:?} literal {} at {}..{}",
                expr.format,
                expr.value,
                expr.span.start,
                expr.span.end()
            );
            Ok(expr)
        }
        None => Err(ParseError::NoLiteralFound { offset }),
    }
}

/// Ordering key for competing literals. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Rank {
    /// The cursor only touches the literal's trailing edge.
    at_end: bool,
    grammar: Grammar,
    len: usize,
}

/// Characters that, when they precede a name, make it part of a longer
/// identifier or member access.
fn continues_name(c: char) -> bool {
    is_ident_char(c) || c == '.'
}
