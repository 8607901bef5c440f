//! Rendering a [`ColorValue`] as a literal in a chosen notation.
//!
//! Output is byte-for-byte stable:
//!
//! - Hex digits are lowercase and never shortened.
//! - Hue is an integer in `0..=359`; percentages are integers rounded half up.
//! - CSS/QSS alpha uses two decimals, QML and GLSL components use three.
//! - Notations without an alpha channel drop it.

use crate::types::color::hue_to_int;
use crate::types::{ColorFormat, ColorValue};

/// Renders `color` in the `target` notation. Never fails.
///
/// # Examples
///
/// ```
/// use colorexpr::{format, ColorFormat, ColorValue};
///
/// let color = ColorValue::rgb(0, 128, 255);
/// assert_eq!(format(&color, ColorFormat::Hex), "#0080ff");
/// assert_eq!(format(&color, ColorFormat::Rgba), "rgba(0, 128, 255, 1.00)");
/// ```
pub fn format(color: &ColorValue, target: ColorFormat) -> String {
    let ColorValue { r, g, b, a } = *color;

    match target {
        ColorFormat::Hex => {
            if color.is_opaque() {
                format!("#{r:02x}{g:02x}{b:02x}")
            } else {
                format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
            }
        }
        ColorFormat::HexAlpha => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
        ColorFormat::Rgb => format!("rgb({r}, {g}, {b})"),
        ColorFormat::RgbPercent => format!(
            "rgb({}%, {}%, {}%)",
            byte_percent(r),
            byte_percent(g),
            byte_percent(b)
        ),
        ColorFormat::Rgba => format!("rgba({r}, {g}, {b}, {:.2})", color.alpha_f()),
        ColorFormat::RgbaPercent => format!(
            "rgba({}%, {}%, {}%, {}%)",
            byte_percent(r),
            byte_percent(g),
            byte_percent(b),
            byte_percent(a)
        ),
        ColorFormat::Hsl | ColorFormat::Hsla => {
            let (h, s, l) = color.hsl_f();
            hue_function("hsl", h, s, l, alpha_suffix(color, target == ColorFormat::Hsla))
        }
        ColorFormat::Hsv | ColorFormat::Hsva => {
            let (h, s, v) = color.hsv_f();
            hue_function("hsv", h, s, v, alpha_suffix(color, target == ColorFormat::Hsva))
        }
        ColorFormat::QmlRgba => float_function(
            "Qt.rgba",
            &[r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, color.alpha_f()],
        ),
        ColorFormat::QmlHsla => {
            let (h, s, l) = color.hsl_f();
            float_function("Qt.hsla", &[h / 360.0, s, l, color.alpha_f()])
        }
        ColorFormat::Vec3 => {
            float_function("vec3", &[r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0])
        }
        ColorFormat::Vec4 => float_function(
            "vec4",
            &[r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, color.alpha_f()],
        ),
    }
}

/// A byte as an integer percentage of 255.
fn byte_percent(byte: u8) -> u32 {
    unit_percent(byte as f64 / 255.0)
}

fn unit_percent(x: f64) -> u32 {
    (x.clamp(0.0, 1.0) * 100.0 + 0.5).floor() as u32
}

fn alpha_suffix(color: &ColorValue, with_alpha: bool) -> Option<f64> {
    with_alpha.then(|| color.alpha_f())
}

/// `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` and the HSV equivalents.
fn hue_function(name: &str, h: f64, s: f64, x: f64, alpha: Option<f64>) -> String {
    let h = hue_to_int(h);
    let s = unit_percent(s);
    let x = unit_percent(x);
    match alpha {
        Some(a) => format!("{name}a({h}, {s}%, {x}%, {a:.2})"),
        None => format!("{name}({h}, {s}%, {x}%)"),
    }
}

fn float_function(name: &str, components: &[f64]) -> String {
    let components: Vec<String> = components.iter().map(|c| format!("{c:.3}")).collect();
    format!("{name}({})", components.join(", "))
}
