#![forbid(unsafe_code)]

//! Color parsing, interpolation and CSS formatting.

use std::fmt;

use tracing::warn;

/// Built-in color used when neither a spec nor its fallback parses.
pub const DEFAULT_COLOR: Rgb = Rgb::new(64, 140, 255);

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors from parsing a color spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    /// Hex body is not 3 or 6 digits long.
    InvalidLength(usize),
    InvalidHex,
    /// `rgb()`/`rgba()` call with the wrong shape.
    InvalidFunction,
    InvalidComponent(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color spec"),
            Self::InvalidLength(len) => write!(f, "hex color must have 3 or 6 digits, got {len}"),
            Self::InvalidHex => f.write_str("invalid hex digit"),
            Self::InvalidFunction => f.write_str("malformed rgb()/rgba() function"),
            Self::InvalidComponent(part) => write!(f, "invalid color component: {part:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb`, `#rrggbb` (the `#` is optional) or `rgb()`/`rgba()`.
    pub fn parse(spec: &str) -> Result<Self, ColorParseError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(args) = function_args(spec) {
            return parse_function(args);
        }
        parse_hex(spec.strip_prefix('#').unwrap_or(spec))
    }

    /// Parse `spec`, falling back to `fallback`, then to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn parse_or(spec: &str, fallback: &str) -> Self {
        match Self::parse(spec) {
            Ok(color) => color,
            Err(err) => {
                warn!(spec, fallback, %err, "color spec rejected, using fallback");
                Self::parse(fallback).unwrap_or(DEFAULT_COLOR)
            }
        }
    }

    /// CSS functional notation, e.g. `rgb(255, 60, 48)`.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Linear interpolation per channel: `round(a + (b - a) * t)`.
///
/// `t` is clamped to `0.0..=1.0`; NaN is treated as 0.
#[must_use]
pub fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let lerp = |from: u8, to: u8| -> u8 {
        let from = f64::from(from);
        let to = f64::from(to);
        (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// Returns the argument list of `rgb(...)`/`rgba(...)`, if `spec` is one.
fn function_args(spec: &str) -> Option<&str> {
    let lower = spec.get(..5).map(str::to_ascii_lowercase)?;
    let rest = if lower == "rgba(" {
        &spec[5..]
    } else if lower.starts_with("rgb(") {
        &spec[4..]
    } else {
        return None;
    };
    Some(rest)
}

fn parse_function(args: &str) -> Result<Rgb, ColorParseError> {
    let inner = args
        .trim_end()
        .strip_suffix(')')
        .ok_or(ColorParseError::InvalidFunction)?;
    // Modern syntax separates alpha with '/', legacy syntax with ','.
    let color_part = inner.split('/').next().unwrap_or(inner);
    let parts: Vec<&str> = color_part
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if !(3..=4).contains(&parts.len()) {
        return Err(ColorParseError::InvalidFunction);
    }
    Ok(Rgb::new(
        parse_channel(parts[0])?,
        parse_channel(parts[1])?,
        parse_channel(parts[2])?,
    ))
}

fn parse_channel(part: &str) -> Result<u8, ColorParseError> {
    let invalid = || ColorParseError::InvalidComponent(part.to_string());
    let value = match part.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().map_err(|_| invalid())? * 255.0 / 100.0,
        None => part.parse::<f64>().map_err(|_| invalid())?,
    };
    if !value.is_finite() {
        return Err(invalid());
    }
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(ColorParseError::InvalidHex),
        }
    };
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Ok(Rgb::new(
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        )),
        6 => {
            let byte = |hi: u8, lo: u8| -> Result<u8, ColorParseError> {
                Ok((nibble(hi)? << 4) | nibble(lo)?)
            };
            Ok(Rgb::new(
                byte(bytes[0], bytes[1])?,
                byte(bytes[2], bytes[3])?,
                byte(bytes[4], bytes[5])?,
            ))
        }
        len => Err(ColorParseError::InvalidLength(len)),
    }
}
