//! # colorexpr - Color literal recognizer and formatter
//!
//! The engine behind the color picker: it finds the color literal under a text
//! cursor, decodes it into a canonical [`ColorValue`], and renders a color back
//! into any supported notation so the literal can be replaced in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorexpr::{format, parse, ColorFormat, ColorValue, Span};
//!
//! let expr = parse("background: #ff0000;", 14).expect("literal under cursor");
//! assert_eq!(expr.span, Span::new(12, 7));
//! assert_eq!(expr.value, ColorValue::rgb(255, 0, 0));
//! assert_eq!(expr.format, ColorFormat::Hex);
//!
//! assert_eq!(format(&expr.value, ColorFormat::Hsl), "hsl(0, 100%, 50%)");
//! ```
//!
//! ## Supported Notations
//!
//! - **Hex**: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - **RGB**: `rgb(r, g, b)`, `rgba(r, g, b, a)`, with byte or percentage channels
//! - **HSL**: `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//! - **HSV**: `hsv(h, s%, v%)`, `hsva(h, s%, v%, a)` (Qt style sheets)
//! - **QML**: `Qt.rgba(r, g, b, a)`, `Qt.hsla(h, s, l, a)`
//! - **GLSL**: `vec3(r, g, b)`, `vec4(r, g, b, a)`
//!
//! Out-of-range arguments are clamped, never rejected. Literals with the wrong
//! number of arguments are ignored entirely.
//!
//! ## Modules
//!
//! - [`parser`]: Locating and decoding literals
//! - [`formatter`]: Rendering colors
//! - [`types`]: Color value, notation tags and spans
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use formatter::format;
pub use parser::parse;
pub use types::{ColorExpr, ColorFormat, ColorValue, FormatFamily, FormatOptions, Hsl, Hsv, Span};
