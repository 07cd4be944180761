#![forbid(unsafe_code)]

//! Game-domain values to meter percentages, for hosts that drive the HUD.

use crate::clamp::Percentage;

/// Temperature in whole degrees Celsius mapped onto the temp meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempScale {
    pub min_c: i32,
    pub max_c: i32,
}

impl Default for TempScale {
    fn default() -> Self {
        Self { min_c: 15, max_c: 32 }
    }
}

impl TempScale {
    /// Clamp `c` into the scale, then map linearly onto `0..=100`.
    #[must_use]
    pub fn to_percentage(self, c: i32) -> Percentage {
        linear(c, self.min_c, self.max_c)
    }

    #[must_use]
    pub fn clamp(self, c: i32) -> i32 {
        c.clamp(self.min_c.min(self.max_c), self.max_c.max(self.min_c))
    }
}

/// Money in discrete steps from zero, mapped onto the money meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyScale {
    pub max_step: i32,
}

impl Default for MoneyScale {
    fn default() -> Self {
        Self { max_step: 5 }
    }
}

impl MoneyScale {
    #[must_use]
    pub fn to_percentage(self, step: i32) -> Percentage {
        linear(step, 0, self.max_step)
    }

    #[must_use]
    pub fn clamp(self, step: i32) -> i32 {
        step.clamp(0, self.max_step.max(0))
    }
}

fn linear(value: i32, min: i32, max: i32) -> Percentage {
    if max <= min {
        return Percentage::ZERO;
    }
    let value = value.clamp(min, max);
    let ratio = f64::from(value - min) / f64::from(max - min);
    Percentage::from_f64(ratio * 100.0)
}
