//! Notation tags for color literals.
//!
//! A [`ColorFormat`] names one concrete textual notation. Formats are grouped
//! into a [`FormatFamily`] (what the user picks in the editor) refined by
//! [`FormatOptions`] sub-options (alpha channel, percentage channels).

use bitflags::bitflags;

bitflags! {
    /// Sub-options refining a notation family.
    ///
    /// # Example
    ///
    /// ```
    /// use colorexpr::{ColorFormat, FormatFamily, FormatOptions};
    ///
    /// let format = FormatFamily::Rgb.format(FormatOptions::ALPHA | FormatOptions::PERCENT);
    /// assert_eq!(format, ColorFormat::RgbaPercent);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatOptions: u8 {
        /// The notation carries an alpha channel.
        const ALPHA   = 0b0000_0001;
        /// Channels are written as percentages.
        const PERCENT = 0b0000_0010;
    }
}

/// A notation family as offered by the format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatFamily {
    #[default]
    Rgb,
    Hsl,
    Hsv,
    Hex,
    QmlRgba,
    QmlHsla,
    Vector,
}

impl FormatFamily {
    pub const ALL: [FormatFamily; 7] = [
        FormatFamily::Rgb,
        FormatFamily::Hsl,
        FormatFamily::Hsv,
        FormatFamily::Hex,
        FormatFamily::QmlRgba,
        FormatFamily::QmlHsla,
        FormatFamily::Vector,
    ];

    /// The sub-options that change the concrete format within this family.
    pub fn supported_options(self) -> FormatOptions {
        match self {
            FormatFamily::Rgb => FormatOptions::ALPHA | FormatOptions::PERCENT,
            FormatFamily::Hsl | FormatFamily::Hsv | FormatFamily::Hex | FormatFamily::Vector => {
                FormatOptions::ALPHA
            }
            FormatFamily::QmlRgba | FormatFamily::QmlHsla => FormatOptions::empty(),
        }
    }

    /// Resolves the concrete format for a set of options.
    ///
    /// Options the family does not support are ignored.
    pub fn format(self, options: FormatOptions) -> ColorFormat {
        let options = options & self.supported_options();
        let alpha = options.contains(FormatOptions::ALPHA);
        let percent = options.contains(FormatOptions::PERCENT);

        match self {
            FormatFamily::Rgb => match (alpha, percent) {
                (false, false) => ColorFormat::Rgb,
                (false, true) => ColorFormat::RgbPercent,
                (true, false) => ColorFormat::Rgba,
                (true, true) => ColorFormat::RgbaPercent,
            },
            FormatFamily::Hsl if alpha => ColorFormat::Hsla,
            FormatFamily::Hsl => ColorFormat::Hsl,
            FormatFamily::Hsv if alpha => ColorFormat::Hsva,
            FormatFamily::Hsv => ColorFormat::Hsv,
            FormatFamily::Hex if alpha => ColorFormat::HexAlpha,
            FormatFamily::Hex => ColorFormat::Hex,
            FormatFamily::QmlRgba => ColorFormat::QmlRgba,
            FormatFamily::QmlHsla => ColorFormat::QmlHsla,
            FormatFamily::Vector if alpha => ColorFormat::Vec4,
            FormatFamily::Vector => ColorFormat::Vec3,
        }
    }
}

/// A concrete color literal notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `rgb(255, 0, 0)`
    Rgb,
    /// `rgb(100%, 0%, 0%)`
    RgbPercent,
    /// `rgba(255, 0, 0, 0.50)`
    Rgba,
    /// `rgba(100%, 0%, 0%, 50%)`
    RgbaPercent,
    /// `hsl(120, 50%, 50%)`
    Hsl,
    /// `hsla(120, 50%, 50%, 0.50)`
    Hsla,
    /// `hsv(120, 50%, 75%)`
    Hsv,
    /// `hsva(120, 50%, 75%, 0.50)`
    Hsva,
    /// `#rrggbb`, widened to `#rrggbbaa` for translucent colors.
    #[default]
    Hex,
    /// `#rrggbbaa`
    HexAlpha,
    /// `Qt.rgba(1.000, 0.000, 0.000, 1.000)`
    QmlRgba,
    /// `Qt.hsla(0.333, 0.500, 0.500, 1.000)`
    QmlHsla,
    /// `vec3(1.000, 0.000, 0.000)`
    Vec3,
    /// `vec4(1.000, 0.000, 0.000, 1.000)`
    Vec4,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 14] = [
        ColorFormat::Rgb,
        ColorFormat::RgbPercent,
        ColorFormat::Rgba,
        ColorFormat::RgbaPercent,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
        ColorFormat::Hsv,
        ColorFormat::Hsva,
        ColorFormat::Hex,
        ColorFormat::HexAlpha,
        ColorFormat::QmlRgba,
        ColorFormat::QmlHsla,
        ColorFormat::Vec3,
        ColorFormat::Vec4,
    ];

    pub fn family(self) -> FormatFamily {
        match self {
            ColorFormat::Rgb
            | ColorFormat::RgbPercent
            | ColorFormat::Rgba
            | ColorFormat::RgbaPercent => FormatFamily::Rgb,
            ColorFormat::Hsl | ColorFormat::Hsla => FormatFamily::Hsl,
            ColorFormat::Hsv | ColorFormat::Hsva => FormatFamily::Hsv,
            ColorFormat::Hex | ColorFormat::HexAlpha => FormatFamily::Hex,
            ColorFormat::QmlRgba => FormatFamily::QmlRgba,
            ColorFormat::QmlHsla => FormatFamily::QmlHsla,
            ColorFormat::Vec3 | ColorFormat::Vec4 => FormatFamily::Vector,
        }
    }

    pub fn options(self) -> FormatOptions {
        match self {
            ColorFormat::RgbPercent => FormatOptions::PERCENT,
            ColorFormat::RgbaPercent => FormatOptions::ALPHA | FormatOptions::PERCENT,
            ColorFormat::Rgba
            | ColorFormat::Hsla
            | ColorFormat::Hsva
            | ColorFormat::HexAlpha
            | ColorFormat::Vec4 => FormatOptions::ALPHA,
            _ => FormatOptions::empty(),
        }
    }

    /// Whether the rendered literal can carry a non-opaque alpha.
    ///
    /// `Hex` widens to eight digits when needed; QML helpers always carry one.
    pub fn has_alpha(self) -> bool {
        self.options().contains(FormatOptions::ALPHA)
            || matches!(
                self,
                ColorFormat::Hex | ColorFormat::QmlRgba | ColorFormat::QmlHsla
            )
    }
}
