//! Canonical RGBA color value with derived HSV and HSL views.
//!
//! [`ColorValue`] is the interchange form between every textual notation the
//! parser recognizes and the formatter emits. Channels are stored as `u8`, so a
//! value can never leave its valid range; the hue/saturation views are computed
//! on demand.
//!
//! ```
//! use colorexpr::ColorValue;
//!
//! let orange = ColorValue::rgb(255, 128, 0);
//! let hsv = orange.hsv();
//! assert_eq!(hsv.hue, 30);
//! assert_eq!(hsv.value, 255);
//! ```

use std::fmt;

use crate::formatter;
use crate::types::format::ColorFormat;

/// Integer HSV view: hue 0-359, saturation and value 0-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Hsv {
    pub hue: u16,
    pub saturation: u8,
    pub value: u8,
}

/// Integer HSL view: hue 0-359, saturation and lightness 0-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorValue {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl ColorValue {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(&self, alpha: u8) -> Self {
        Self { a: alpha, ..*self }
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn alpha_f(&self) -> f64 {
        self.a as f64 / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// Creates a color from fractional HSV components.
    ///
    /// `h` is in degrees and wraps around; `s` and `v` are clamped to
    /// `0.0..=1.0`.
    pub fn from_hsv(h: f64, s: f64, v: f64, alpha: u8) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let sector = h / 60.0;
        let x = c * (1.0 - ((sector % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgba(
            unit_to_byte(r + m),
            unit_to_byte(g + m),
            unit_to_byte(b + m),
            alpha,
        )
    }

    /// Creates a color from the integer HSV scale used by the sliders.
    pub fn from_hsv_int(hue: u16, saturation: u8, value: u8, alpha: u8) -> Self {
        Self::from_hsv(
            hue.min(359) as f64,
            saturation as f64 / 255.0,
            value as f64 / 255.0,
            alpha,
        )
    }

    /// Creates a color from fractional HSL components.
    ///
    /// `h` is in degrees and wraps around; `s` and `l` are clamped to
    /// `0.0..=1.0`.
    pub fn from_hsl(h: f64, s: f64, l: f64, alpha: u8) -> Self {
        let h = h.rem_euclid(360.0) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Self::rgba(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b), alpha)
    }

    /// Fractional HSV: hue in degrees `0.0..360.0`, saturation and value in
    /// `0.0..=1.0`. Achromatic colors report a hue of `0.0`.
    pub fn hsv_f(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        (hue_degrees(r, g, b, max, d), s, max)
    }

    /// Fractional HSL: hue in degrees `0.0..360.0`, saturation and lightness
    /// in `0.0..=1.0`.
    pub fn hsl_f(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.unit_rgb();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;
        let l = (max + min) / 2.0;

        let s = if d == 0.0 {
            0.0
        } else if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        (hue_degrees(r, g, b, max, d), s, l)
    }

    pub fn hsv(&self) -> Hsv {
        let (h, s, v) = self.hsv_f();
        Hsv {
            hue: hue_to_int(h),
            saturation: unit_to_byte(s),
            value: unit_to_byte(v),
        }
    }

    pub fn hsl(&self) -> Hsl {
        let (h, s, l) = self.hsl_f();
        Hsl {
            hue: hue_to_int(h),
            saturation: unit_to_byte(s),
            lightness: unit_to_byte(l),
        }
    }

    fn unit_rgb(&self) -> (f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        )
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&formatter::format(self, ColorFormat::Hex))
    }
}

/// Converts a fraction to a byte, clamping and rounding half up.
pub(crate) fn unit_to_byte(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

/// Rounds a hue in degrees to the integer scale `0..=359`.
pub(crate) fn hue_to_int(h: f64) -> u16 {
    ((h + 0.5).floor() as i64).rem_euclid(360) as u16
}

fn hue_degrees(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    if d == 0.0 {
        return 0.0;
    }
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h * 60.0
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
