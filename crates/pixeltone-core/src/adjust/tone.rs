//! Brightness and contrast adjustment.
//!
//! For each channel `c` in `{R, G, B}`:
//! ```text
//!   step1 = clamp(c + brightness, 0, 255)
//!   out   = clamp(round(step1 × contrast / 50), 0, 255)
//! ```
//!
//! Brightness is always applied before contrast; the two do not commute.
//! `contrast = 50` is a multiplier of 1.0, `0` blacks the image out and
//! negative values clamp every channel to 0. Alpha passes through.

use serde::{Deserialize, Serialize};

use crate::adjust::channel::{Rounding, clamp_channel, scale_channel};
use crate::error::EditError;
use crate::image::{ImageBuffer, Rgba8};
use crate::parallel;

/// Lowest accepted brightness.
pub const BRIGHTNESS_MIN: i32 = -100;
/// Highest accepted brightness.
pub const BRIGHTNESS_MAX: i32 = 100;
/// Lowest accepted contrast.
pub const CONTRAST_MIN: i32 = -100;
/// Highest accepted contrast.
pub const CONTRAST_MAX: i32 = 100;
/// Contrast value whose multiplier is exactly 1.0.
pub const CONTRAST_NEUTRAL: i32 = 50;

/// Brightness and contrast settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneParams {
    /// Additive channel offset. 0 = neutral.
    pub brightness: i32,
    /// Multiplicative channel scale, `contrast / 50`. 50 = neutral.
    pub contrast: i32,
    /// Integer conversion for the contrast step.
    pub rounding: Rounding,
}

impl Default for ToneParams {
    /// Produces an identity (no-op) adjustment.
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: CONTRAST_NEUTRAL,
            rounding: Rounding::Truncate,
        }
    }
}

impl ToneParams {
    pub fn new(brightness: i32, contrast: i32) -> Self {
        Self {
            brightness,
            contrast,
            ..Self::default()
        }
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Contrast multiplier applied in the second step.
    pub fn multiplier(&self) -> f64 {
        f64::from(self.contrast) / f64::from(CONTRAST_NEUTRAL)
    }

    /// Whether this adjustment leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == CONTRAST_NEUTRAL
    }

    /// Reject out-of-range parameters. Parameters are never clamped.
    pub fn validate(&self) -> Result<(), EditError> {
        check_range("brightness", self.brightness, BRIGHTNESS_MIN, BRIGHTNESS_MAX)?;
        check_range("contrast", self.contrast, CONTRAST_MIN, CONTRAST_MAX)
    }
}

fn check_range(name: &'static str, value: i32, min: i32, max: i32) -> Result<(), EditError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(EditError::InvalidParameter {
            name,
            value,
            min,
            max,
        })
    }
}

/// Adjust a single pixel. Parameters are assumed valid.
#[inline]
pub fn adjust_pixel(px: Rgba8, params: &ToneParams) -> Rgba8 {
    let multiplier = params.multiplier();
    px.with_channels(px.channels().map(|c| {
        let step1 = clamp_channel(i32::from(c) + params.brightness);
        scale_channel(step1, multiplier, params.rounding)
    }))
}

/// Apply brightness then contrast to every pixel of `source`.
///
/// Returns a new buffer of the same dimensions; `source` is not modified.
pub fn adjust(source: &ImageBuffer, params: &ToneParams) -> Result<ImageBuffer, EditError> {
    params.validate()?;
    parallel::map_pixels(source, |px| adjust_pixel(px, params))
}
