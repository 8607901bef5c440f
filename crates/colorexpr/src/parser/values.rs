//! Grammars for individual color literals.
//!
//! Each grammar parses a literal that starts at the beginning of its input:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - CSS / Qt style sheets: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `hsv()`, `hsva()`
//! - QML: `Qt.rgba()`, `Qt.hsla()`
//! - GLSL: `vec3()`, `vec4()`
//!
//! Locating the literal around a cursor is the job of [`super::parse`].

use nom::{
    IResult,
    bytes::complete::take_while1,
    character::complete::char,
    error::{Error, ErrorKind},
    sequence::preceded,
};
use phf::phf_map;

use crate::parser::units::{Number, parse_arguments};
use crate::types::color::{ColorValue, unit_to_byte};
use crate::types::format::ColorFormat;

/// Grammar groups in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grammar {
    Hex,
    Function,
    Markup,
    Vector,
}

/// A literal decoded from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal {
    pub grammar: Grammar,
    pub value: ColorValue,
    pub format: ColorFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Function {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
    Hsva,
    QtRgba,
    QtHsla,
    Vec3,
    Vec4,
}

static FUNCTIONS: phf::Map<&'static str, Function> = phf_map! {
    "rgb" => Function::Rgb,
    "rgba" => Function::Rgba,
    "hsl" => Function::Hsl,
    "hsla" => Function::Hsla,
    "hsv" => Function::Hsv,
    "hsva" => Function::Hsva,
    "Qt.rgba" => Function::QtRgba,
    "Qt.hsla" => Function::QtHsla,
    "vec3" => Function::Vec3,
    "vec4" => Function::Vec4,
};

impl Function {
    /// Looks up a function name. CSS names are case-insensitive, QML and GLSL
    /// names are not.
    fn lookup(name: &str) -> Option<Self> {
        FUNCTIONS.get(name).copied().or_else(|| {
            FUNCTIONS
                .get(name.to_ascii_lowercase().as_str())
                .copied()
                .filter(|f| f.grammar() == Grammar::Function)
        })
    }

    fn grammar(self) -> Grammar {
        match self {
            Function::QtRgba | Function::QtHsla => Grammar::Markup,
            Function::Vec3 | Function::Vec4 => Grammar::Vector,
            _ => Grammar::Function,
        }
    }

    /// QML and GLSL arguments are plain floats.
    fn accepts_percent(self) -> bool {
        self.grammar() == Grammar::Function
    }

    fn arity(self) -> usize {
        match self {
            Function::Rgb | Function::Hsl | Function::Hsv | Function::Vec3 => 3,
            _ => 4,
        }
    }

    /// Interprets an argument list of the right arity.
    fn decode(self, args: &[Number]) -> (ColorValue, ColorFormat) {
        let all_percent = args.iter().all(|n| n.percent);

        match self {
            Function::Rgb => {
                let value =
                    ColorValue::rgb(args[0].to_channel(), args[1].to_channel(), args[2].to_channel());
                let format = if all_percent {
                    ColorFormat::RgbPercent
                } else {
                    ColorFormat::Rgb
                };
                (value, format)
            }
            Function::Rgba => {
                let value = ColorValue::rgba(
                    args[0].to_channel(),
                    args[1].to_channel(),
                    args[2].to_channel(),
                    args[3].to_alpha(),
                );
                let format = if all_percent {
                    ColorFormat::RgbaPercent
                } else {
                    ColorFormat::Rgba
                };
                (value, format)
            }
            Function::Hsl | Function::Hsla => {
                let (a, format) = if self == Function::Hsla {
                    (args[3].to_alpha(), ColorFormat::Hsla)
                } else {
                    (u8::MAX, ColorFormat::Hsl)
                };
                let value =
                    ColorValue::from_hsl(args[0].to_hue(), args[1].to_unit(), args[2].to_unit(), a);
                (value, format)
            }
            Function::Hsv | Function::Hsva => {
                let (a, format) = if self == Function::Hsva {
                    (args[3].to_alpha(), ColorFormat::Hsva)
                } else {
                    (u8::MAX, ColorFormat::Hsv)
                };
                let value =
                    ColorValue::from_hsv(args[0].to_hue(), args[1].to_unit(), args[2].to_unit(), a);
                (value, format)
            }
            Function::QtRgba => {
                let [r, g, b, a] = fractions(args);
                let value = ColorValue::rgba(
                    unit_to_byte(r),
                    unit_to_byte(g),
                    unit_to_byte(b),
                    unit_to_byte(a),
                );
                (value, ColorFormat::QmlRgba)
            }
            Function::QtHsla => {
                let [h, s, l, a] = fractions(args);
                let value = ColorValue::from_hsl(h * 360.0, s, l, unit_to_byte(a));
                (value, ColorFormat::QmlHsla)
            }
            Function::Vec3 | Function::Vec4 => {
                let [r, g, b, a] = fractions(args);
                let value = ColorValue::rgba(
                    unit_to_byte(r),
                    unit_to_byte(g),
                    unit_to_byte(b),
                    unit_to_byte(a),
                );
                let format = if self == Function::Vec4 {
                    ColorFormat::Vec4
                } else {
                    ColorFormat::Vec3
                };
                (value, format)
            }
        }
    }
}

/// Clamped float components; a missing fourth component is opaque.
fn fractions(args: &[Number]) -> [f64; 4] {
    let mut out = [1.0; 4];
    for (slot, n) in out.iter_mut().zip(args) {
        *slot = n.to_fraction();
    }
    out
}

/// Characters that continue an identifier or number.
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parses any supported literal at the start of `input`.
pub fn parse_literal(input: &str) -> IResult<&str, Literal> {
    if input.starts_with('#') {
        parse_hex_literal(input)
    } else {
        parse_function_literal(input)
    }
}

/// Parses a hex literal (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`).
pub fn parse_hex_literal(input: &str) -> IResult<&str, Literal> {
    let (remaining, digits) =
        preceded(char('#'), take_while1(|c: char| c.is_ascii_hexdigit()))(input)?;

    if remaining.starts_with(is_ident_char) {
        return Err(verify_error(input));
    }

    let nibbles: Vec<u8> = digits
        .bytes()
        .filter_map(|b| (b as char).to_digit(16).map(|d| d as u8))
        .collect();

    let (value, format) = match nibbles.as_slice() {
        &[r, g, b] => (ColorValue::rgb(r * 17, g * 17, b * 17), ColorFormat::Hex),
        &[r, g, b, a] => (
            ColorValue::rgba(r * 17, g * 17, b * 17, a * 17),
            ColorFormat::HexAlpha,
        ),
        &[r1, r2, g1, g2, b1, b2] => (
            ColorValue::rgb((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2),
            ColorFormat::Hex,
        ),
        &[r1, r2, g1, g2, b1, b2, a1, a2] => (
            ColorValue::rgba((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2, (a1 << 4) | a2),
            ColorFormat::HexAlpha,
        ),
        _ => return Err(verify_error(input)),
    };

    Ok((
        remaining,
        Literal {
            grammar: Grammar::Hex,
            value,
            format,
        },
    ))
}

/// Parses a function-call literal such as `rgba(0, 128, 255, 0.50)`.
pub fn parse_function_literal(input: &str) -> IResult<&str, Literal> {
    let (remaining, name) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.')(input)?;
    let function = Function::lookup(name).ok_or_else(|| verify_error(input))?;

    let (remaining, args) = parse_arguments(remaining)?;
    if args.len() != function.arity() {
        log::trace!(
            "rejecting {name}(): expected {} arguments, found {}",
            function.arity(),
            args.len()
        );
        return Err(verify_error(input));
    }
    if !function.accepts_percent() && args.iter().any(|n| n.percent) {
        log::trace!("rejecting {name}(): percentage arguments are not allowed");
        return Err(verify_error(input));
    }

    let (value, format) = function.decode(&args);
    Ok((
        remaining,
        Literal {
            grammar: function.grammar(),
            value,
            format,
        },
    ))
}

fn verify_error(input: &str) -> nom::Err<Error<&str>> {
    nom::Err::Error(Error::new(input, ErrorKind::Verify))
}
