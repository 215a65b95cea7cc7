//! Per-channel clamp and scale primitives shared by every adjustment.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// Lowest valid channel value.
pub const CHANNEL_MIN: i32 = 0;
/// Highest valid channel value.
pub const CHANNEL_MAX: i32 = u8::MAX as i32;

/// How a scaled channel value is converted back to an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Drop the fractional part (round toward zero).
    #[default]
    Truncate,
    /// Round to the nearest integer, halves away from zero.
    Nearest,
}

impl Rounding {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Nearest => "nearest",
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            Self::Truncate => value.trunc(),
            Self::Nearest => value.round(),
        }
    }
}

impl FromStr for Rounding {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::Truncate, Self::Nearest]
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| EditError::UnknownRounding(s.to_string()))
    }
}

/// Constrain a channel value to `[0, 255]`.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}

/// Multiply a channel by `factor`, round, then clamp.
///
/// Negative factors are valid and clamp to 0.
#[inline]
pub fn scale_channel(value: u8, factor: f64, rounding: Rounding) -> u8 {
    let scaled = rounding.apply(f64::from(value) * factor);
    // `as` saturates, and the scaled range here is far inside i32 anyway.
    clamp_channel(scaled as i32)
}
