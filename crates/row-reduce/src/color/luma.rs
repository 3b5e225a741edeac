//! Integer luminance and the white-point threshold.
//!
//! Luminance uses the BT.709 weights scaled by 10000 so the whole
//! computation stays in integers:
//!
//! ```text
//! luma = 2126 * R + 7152 * G + 722 * B      (0 ..= 2_550_000)
//! ```
//!
//! The threshold lives in the same value space. It is configured as a
//! white-point percentage and converted once with
//! `floor(2_550_000 * percent / 100)`.

use thiserror::Error;

use super::Rgb;

/// Red weight (BT.709, scaled by 10000).
pub const LUMA_RED: u32 = 2126;
/// Green weight (BT.709, scaled by 10000).
pub const LUMA_GREEN: u32 = 7152;
/// Blue weight (BT.709, scaled by 10000).
pub const LUMA_BLUE: u32 = 722;

/// Luminance of pure white: `255 * 10000`.
pub const FULL_WHITE: u32 = 255 * 10_000;

/// Scaled integer luminance of a pixel.
///
/// # Example
/// ```
/// use row_reduce::color::{luma, FULL_WHITE};
/// use row_reduce::Rgb;
///
/// assert_eq!(luma(Rgb::WHITE), FULL_WHITE);
/// assert_eq!(luma(Rgb::BLACK), 0);
/// ```
#[inline]
pub fn luma(pixel: Rgb) -> u32 {
    LUMA_RED * pixel.r as u32 + LUMA_GREEN * pixel.g as u32 + LUMA_BLUE * pixel.b as u32
}

/// Error returned for a white-point percentage outside `(0, 100]`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    /// Percentage is zero, negative, above 100, or not a number
    #[error("white value should be between 0 and 100, got {0}")]
    OutOfRange(f64),
}

/// Luminance threshold separating the black slot from the white slot.
///
/// Pixels whose [`luma`] is less than or equal to the threshold go to
/// the black slot; brighter pixels go to the white slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u32);

impl Threshold {
    /// Default white-point percentage.
    pub const DEFAULT_PERCENT: f64 = 50.0;

    /// The 50% threshold (`1_275_000`).
    pub const DEFAULT: Self = Self(FULL_WHITE / 2);

    /// Convert a white-point percentage into a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::OutOfRange`] unless `0 < percent <= 100`.
    ///
    /// # Example
    /// ```
    /// use row_reduce::Threshold;
    ///
    /// assert_eq!(Threshold::from_percent(50.0).unwrap(), Threshold::DEFAULT);
    /// assert!(Threshold::from_percent(0.0).is_err());
    /// ```
    pub fn from_percent(percent: f64) -> Result<Self, ThresholdError> {
        // Written so that NaN falls through to the error
        if !(percent > 0.0 && percent <= 100.0) {
            return Err(ThresholdError::OutOfRange(percent));
        }
        Ok(Self((FULL_WHITE as f64 * percent / 100.0) as u32))
    }

    /// Build a threshold directly from a luminance value.
    ///
    /// Values above [`FULL_WHITE`] are clamped.
    #[inline]
    pub fn from_luma(value: u32) -> Self {
        Self(value.min(FULL_WHITE))
    }

    /// The raw luminance value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether a pixel is dark enough for the black slot.
    ///
    /// The boundary is inclusive: a pixel exactly at the threshold is dark.
    #[inline]
    pub fn is_dark(self, pixel: Rgb) -> bool {
        luma(pixel) <= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}
