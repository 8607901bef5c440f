//! # colorpicker
//!
//! Edit the color literal under a text cursor. A host editor hands
//! [`ColorPicker::trigger`] the current line and cursor offset; if a literal is
//! there, an [`EditSession`] opens on it, the user adjusts the color through the
//! session and every buffer write comes back as a [`Replacement`].
//!
//! - [`colorexpr`] finds, decodes and renders the literals
//! - [`picker`] holds the editor model and output-format selection
//! - [`PickerSettings`] configures when and in which notation text is written

pub mod error;
pub mod replacement;
pub mod session;
pub mod settings;

pub use error::{PickerError, Result};
pub use replacement::Replacement;
pub use session::{ColorPicker, EditSession};
pub use settings::PickerSettings;

pub use colorexpr::{ColorFormat, ColorValue, FormatFamily, FormatOptions, Span};
pub use picker::{UpdateReason, View};
