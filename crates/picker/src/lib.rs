//! Editor-side state for the color picker.
//!
//! - [`FormatSelector`]: which notation the edited color is written back in
//! - [`ColorEditor`]: the color being edited, its slider positions and the
//!   observers that keep views in sync
//! - [`log_init`]: a small file logger for hosts without their own `log` backend

pub mod editor;
pub mod log_init;
pub mod selector;

pub use editor::{ColorEditor, UpdateReason, View};
pub use log_init::init_logger;
pub use selector::FormatSelector;
