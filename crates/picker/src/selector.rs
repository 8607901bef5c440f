//! Output-format selection.
//!
//! The editor offers one button per [`FormatFamily`] plus toggles for the
//! family's sub-options (alpha, percent). [`FormatSelector`] is the state
//! behind those buttons; every state resolves to exactly one [`ColorFormat`].

use colorexpr::{ColorFormat, FormatFamily, FormatOptions};

/// The active notation family and its sub-options.
///
/// # Example
///
/// ```
/// use colorexpr::{ColorFormat, FormatFamily, FormatOptions};
/// use picker::FormatSelector;
///
/// let mut selector = FormatSelector::new(ColorFormat::Hex);
/// assert_eq!(selector.select_family(FormatFamily::Rgb), ColorFormat::Rgb);
/// assert_eq!(selector.toggle(FormatOptions::ALPHA), ColorFormat::Rgba);
/// assert_eq!(selector.toggle(FormatOptions::PERCENT), ColorFormat::RgbaPercent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatSelector {
    family: FormatFamily,
    options: FormatOptions,
}

impl FormatSelector {
    /// Starts in the family and options of `format`.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            family: format.family(),
            options: format.options(),
        }
    }

    pub fn family(&self) -> FormatFamily {
        self.family
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// The concrete format for the current state.
    pub fn format(&self) -> ColorFormat {
        self.family.format(self.options)
    }

    /// Switches the active family.
    ///
    /// Moving to another family resets its sub-options to the defaults;
    /// re-selecting the active family keeps them.
    pub fn select_family(&mut self, family: FormatFamily) -> ColorFormat {
        if family != self.family {
            self.family = family;
            self.options = FormatOptions::empty();
        }
        self.format()
    }

    /// Flips a sub-option of the active family. Unsupported options are ignored.
    pub fn toggle(&mut self, option: FormatOptions) -> ColorFormat {
        let option = option & self.family.supported_options();
        self.options.toggle(option);
        self.format()
    }

    /// Sets a sub-option of the active family. Unsupported options are ignored.
    pub fn set_option(&mut self, option: FormatOptions, enabled: bool) -> ColorFormat {
        let option = option & self.family.supported_options();
        self.options.set(option, enabled);
        self.format()
    }
}
