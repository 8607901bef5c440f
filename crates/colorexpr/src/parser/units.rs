//! Numeric argument parsing and channel interpretation.
//!
//! Arguments are parsed once into a [`Number`] that remembers how it was
//! written (percentage, fractional part). How that number maps onto a channel
//! depends on the notation, so the conversions live here as methods.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list1,
    sequence::{delimited, pair, tuple},
};

use crate::types::color::unit_to_byte;

/// A numeric literal as written in a color argument list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number {
    pub value: f64,
    /// Written with a trailing `%`.
    pub percent: bool,
    /// Written with a decimal point.
    pub fractional: bool,
}

impl Number {
    /// RGB channel: percentage of 255, otherwise the byte scale.
    pub fn to_channel(self) -> u8 {
        if self.percent {
            unit_to_byte(self.value / 100.0)
        } else {
            unit_to_byte(self.value / 255.0)
        }
    }

    /// Alpha in CSS style: percentage, otherwise a `0.0..=1.0` fraction.
    pub fn to_alpha(self) -> u8 {
        if self.percent {
            unit_to_byte(self.value / 100.0)
        } else {
            unit_to_byte(self.value)
        }
    }

    /// Saturation, lightness or value in CSS/QSS style.
    ///
    /// Percentages and fractional numbers are read as-is; a bare integer uses
    /// the 0-255 scale of Qt style sheets.
    pub fn to_unit(self) -> f64 {
        let unit = if self.percent {
            self.value / 100.0
        } else if self.fractional {
            self.value
        } else {
            self.value / 255.0
        };
        unit.clamp(0.0, 1.0)
    }

    /// Hue in degrees, clamped to `0..=359`.
    pub fn to_hue(self) -> f64 {
        self.value.clamp(0.0, 359.0)
    }

    /// A float component of a QML or GLSL literal.
    pub fn to_fraction(self) -> f64 {
        self.value.clamp(0.0, 1.0)
    }
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit1)))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)
}

/// Parse a number with an optional `%` suffix.
pub fn parse_component(input: &str) -> IResult<&str, Number> {
    let (input, (value, fractional)) = map_res(parse_number, |s: &str| {
        s.parse::<f64>().map(|value| (value, s.contains('.')))
    })(input)?;
    let (input, percent) = map(opt(char('%')), |p| p.is_some())(input)?;

    Ok((
        input,
        Number {
            value,
            percent,
            fractional,
        },
    ))
}

/// Parse a parenthesized, comma-separated argument list (e.g. "(1, 2%, .5)").
pub fn parse_arguments(input: &str) -> IResult<&str, Vec<Number>> {
    delimited(
        pair(char('('), multispace0),
        separated_list1(tuple((multispace0, char(','), multispace0)), parse_component),
        pair(multispace0, char(')')),
    )(input)
}
