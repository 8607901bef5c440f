use colorexpr::ColorFormat;

/// User-facing options for the color picker.
///
/// ```
/// use colorexpr::ColorFormat;
/// use colorpicker::PickerSettings;
///
/// let settings = PickerSettings::default()
///     .with_insert_on_change(true)
///     .with_default_format(ColorFormat::Rgba);
/// assert!(settings.keep_original_format);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSettings {
    /// Write every intermediate color back to the buffer, not only on commit.
    pub insert_on_change: bool,
    /// Start the session in the notation the literal was written in.
    pub keep_original_format: bool,
    /// Session format when `keep_original_format` is off.
    pub default_format: ColorFormat,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            insert_on_change: false,
            keep_original_format: true,
            default_format: ColorFormat::Hex,
        }
    }
}

impl PickerSettings {
    pub fn with_insert_on_change(mut self, enabled: bool) -> Self {
        self.insert_on_change = enabled;
        self
    }

    pub fn with_keep_original_format(mut self, enabled: bool) -> Self {
        self.keep_original_format = enabled;
        self
    }

    pub fn with_default_format(mut self, format: ColorFormat) -> Self {
        self.default_format = format;
        self
    }
}
