#![forbid(unsafe_code)]

//! Normalization of arbitrary input into a bounded integer percentage.
//!
//! Nothing here can fail: missing, non-numeric and out-of-range input all
//! land somewhere in `0..=100`.

use std::fmt;

/// Raw input to the clamp, as handed over by a URL field or an API caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawValue<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for RawValue<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u8> for RawValue<'_> {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Missing, Self::Text)
    }
}

impl From<Percentage> for RawValue<'_> {
    fn from(value: Percentage) -> Self {
        Self::Number(f64::from(value.get()))
    }
}

/// Integer percentage, always in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// Clamp any raw input. Never fails.
    #[must_use]
    pub fn clamp<'a>(raw: impl Into<RawValue<'a>>) -> Self {
        match raw.into() {
            RawValue::Missing => Self::ZERO,
            RawValue::Number(value) => Self::from_f64(value),
            RawValue::Text(text) => Self::parse(text),
        }
    }

    /// Round to nearest, then clamp. NaN maps to 0.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// Parse decimal text. Anything that is not a number maps to 0,
    /// including the words `inf` and `nan`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if !is_decimal(trimmed) {
            return Self::ZERO;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::from_f64(value),
            Err(_) => Self::ZERO,
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Fraction in `0.0..=1.0`, suitable as a color interpolation factor.
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

/// `[+-]digits[.digits][e[+-]digits]`, with digits required on at least one
/// side of the point.
fn is_decimal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(i);
    let mut mantissa_digits = int_end - i;
    i = int_end;
    if bytes.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        mantissa_digits += frac_end - (i + 1);
        i = frac_end;
    }
    if mantissa_digits == 0 {
        return false;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_end = digits_from(i);
        if exp_end == i {
            return false;
        }
        i = exp_end;
    }
    i == bytes.len()
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
