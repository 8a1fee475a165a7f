//! Parse free-form color text into [`Rgb`].
//!
//! The supported notations are tried in order:
//! * `#RGB`, `#RRGGBB` (the `#` is optional)
//! * `rgb(r, g, b)`, `rgba(r g b / a)`, channels as numbers or percentages
//! * `hsl(h, s, l)`, `hsla(h s l / a)`, saturation and lightness as
//!   percentages or fractions
//!
//! [`parse`] never fails: text that does not match any notation becomes
//! [`FALLBACK`]. Use [`try_parse`] to find out why a string was rejected.

use std::str::FromStr;

use crate::{
    color::Component,
    math::{clamp_unit, to_channel},
    models::{Hsl, Rgb},
};

/// The color substituted for text that could not be parsed.
pub const FALLBACK: Rgb = Rgb::new(26, 164, 255);

/// Reasons color text could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// Nothing but whitespace.
    #[error("empty color string")]
    Empty,

    /// The text does not look like any supported notation.
    #[error("unrecognized color notation: '{0}'")]
    UnknownNotation(String),

    /// Started with `#` but is not 3 or 6 hex digits.
    #[error("invalid hex color: '{0}'")]
    InvalidHex(String),

    /// A color function with fewer than three components.
    #[error("{notation}() needs 3 components, found {found}")]
    MissingComponents {
        /// The function name.
        notation: &'static str,
        /// How many components were present.
        found: usize,
    },

    /// A component that does not start with a number.
    #[error("invalid number in {notation}(): '{token}'")]
    InvalidNumber {
        /// The function name.
        notation: &'static str,
        /// The offending component.
        token: String,
    },
}

/// A supported color notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `rgb()` or `rgba()`.
    Rgb,
    /// `hsl()` or `hsla()`.
    Hsl,
}

impl Notation {
    /// Every notation, in the order they are tried.
    pub const ALL: [Notation; 3] = [Notation::Hex, Notation::Rgb, Notation::Hsl];

    /// If the text is written in this notation, return the part holding the
    /// components: the digits for hex, the function arguments otherwise.
    pub fn matches<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Notation::Hex => match text.strip_prefix('#') {
                Some(digits) => Some(digits),
                None => is_hex_digits(text).then_some(text),
            },
            Notation::Rgb => function_arguments(text, &["rgba", "rgb"]),
            Notation::Hsl => function_arguments(text, &["hsla", "hsl"]),
        }
    }

    /// Convert the components returned by [`Notation::matches`].
    pub fn convert(&self, payload: &str) -> Result<Rgb, ParseColorError> {
        match self {
            Notation::Hex => parse_hex(payload),
            Notation::Rgb => parse_rgb_function(payload),
            Notation::Hsl => parse_hsl_function(payload),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::Hsl => "hsl",
        }
    }
}

/// Parse color text, reporting why it was rejected.
pub fn try_parse(input: &str) -> Result<Rgb, ParseColorError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseColorError::Empty);
    }

    for notation in Notation::ALL {
        if let Some(payload) = notation.matches(text) {
            return notation.convert(payload);
        }
    }

    Err(ParseColorError::UnknownNotation(text.to_string()))
}

/// Parse color text, substituting [`FALLBACK`] for anything unrecognized.
pub fn parse(input: &str) -> Rgb {
    try_parse(input).unwrap_or_else(|error| {
        tracing::debug!(input, %error, "using fallback color");
        FALLBACK
    })
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        try_parse(s)
    }
}

fn is_hex_digits(text: &str) -> bool {
    matches!(text.len(), 3 | 6) && text.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_hex(digits: &str) -> Result<Rgb, ParseColorError> {
    if !is_hex_digits(digits) {
        return Err(ParseColorError::InvalidHex(format!("#{digits}")));
    }

    let expanded;
    let digits = if digits.len() == 3 {
        expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
        expanded.as_str()
    } else {
        digits
    };

    u32::from_str_radix(digits, 16)
        .map(Rgb::from_u24)
        .map_err(|_| ParseColorError::InvalidHex(format!("#{digits}")))
}

/// Strip a case-insensitive function name and its parentheses. The first
/// matching name wins, so longer names must come first.
fn function_arguments<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    let name = names.iter().find(|name| {
        text.get(..name.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
    })?;

    let arguments = text[name.len()..].strip_prefix('(')?.strip_suffix(')')?;
    (!arguments.is_empty() && !arguments.contains(')')).then_some(arguments)
}

/// Split function arguments on runs of commas, slashes and spaces.
fn split_arguments(arguments: &str) -> Vec<&str> {
    arguments
        .split([',', '/', ' '])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// The three leading components of a color function. Anything after them,
/// like an alpha value, is ignored.
fn three_components(
    notation: Notation,
    arguments: &str,
) -> Result<[&str; 3], ParseColorError> {
    let tokens = split_arguments(arguments);
    match tokens.as_slice() {
        [a, b, c, ..] => Ok([*a, *b, *c]),
        _ => Err(ParseColorError::MissingComponents {
            notation: notation.name(),
            found: tokens.len(),
        }),
    }
}

/// Read the longest numeric prefix of a token, so `50%` and `120deg` yield
/// their numbers.
fn leading_number(notation: Notation, token: &str) -> Result<Component, ParseColorError> {
    token[..numeric_prefix_len(token)]
        .parse::<Component>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseColorError::InvalidNumber {
            notation: notation.name(),
            token: token.to_string(),
        })
}

/// Length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run. An
/// exponent marker without digits after it is not part of the number.
fn numeric_prefix_len(token: &str) -> usize {
    let bytes = token.as_bytes();
    let digits_from = |start: usize| {
        start
            + bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    end = digits_from(end);
    if bytes.get(end) == Some(&b'.') {
        end = digits_from(end + 1);
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    end
}

fn parse_rgb_function(arguments: &str) -> Result<Rgb, ParseColorError> {
    let channel = |token: &str| -> Result<u8, ParseColorError> {
        let value = leading_number(Notation::Rgb, token)?;
        Ok(if token.ends_with('%') {
            to_channel(value * 2.55)
        } else {
            to_channel(value)
        })
    };

    let [red, green, blue] = three_components(Notation::Rgb, arguments)?;
    Ok(Rgb::new(channel(red)?, channel(green)?, channel(blue)?))
}

fn parse_hsl_function(arguments: &str) -> Result<Rgb, ParseColorError> {
    let fraction = |token: &str| -> Result<Component, ParseColorError> {
        let value = leading_number(Notation::Hsl, token)?;
        let value = if token.ends_with('%') {
            value / 100.0
        } else {
            value
        };
        Ok(clamp_unit(value))
    };

    let [hue, saturation, lightness] = three_components(Notation::Hsl, arguments)?;
    Ok(Hsl::new(
        leading_number(Notation::Hsl, hue)?,
        fraction(saturation)?,
        fraction(lightness)?,
    )
    .to_srgb())
}
