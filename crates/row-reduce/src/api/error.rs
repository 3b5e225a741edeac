//! Unified error type for the row-reduce public API.
//!
//! [`ReduceError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use thiserror::Error;

use crate::color::ThresholdError;
use crate::pack::PackError;
use crate::palette::PaletteError;

/// Unified error type for the row-reduce public API.
///
/// # Example
///
/// ```
/// use row_reduce::{Palette, ReduceError, Rgb, Threshold};
///
/// fn setup(percent: f64) -> Result<(Palette, Threshold), ReduceError> {
///     let palette = Palette::from_colors([Rgb::new(255, 0, 0)])?;
///     let threshold = Threshold::from_percent(percent)?;
///     Ok((palette, threshold))
/// }
///
/// assert!(setup(50.0).is_ok());
/// assert!(setup(0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReduceError {
    /// Palette registration failed
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
    /// White-point percentage out of range
    #[error("threshold error: {0}")]
    Threshold(#[from] ThresholdError),
    /// Packing hit an index the bit depth cannot hold
    #[error("packing error: {0}")]
    Pack(#[from] PackError),
    /// Interleaved RGB input whose length is not a multiple of 3
    #[error("row of {len} bytes is not made of 3-component RGB pixels")]
    ComponentCount {
        /// Byte length of the rejected row
        len: usize,
    },
}
