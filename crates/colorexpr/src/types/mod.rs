pub mod color;
pub mod expr;
pub mod format;

pub use color::{ColorValue, Hsl, Hsv};
pub use expr::{ColorExpr, Span};
pub use format::{ColorFormat, FormatFamily, FormatOptions};
