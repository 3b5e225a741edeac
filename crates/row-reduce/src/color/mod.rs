//! Color types and luminance
//!
//! - [`Rgb`]: 8-bit color used for pixels and palette entries
//! - [`luma`]: BT.709-weighted integer luminance
//! - [`Threshold`]: white-point cutoff in luminance space

mod luma;
mod rgb;

pub use luma::{
    luma, Threshold, ThresholdError, FULL_WHITE, LUMA_BLUE, LUMA_GREEN, LUMA_RED,
};
pub use rgb::Rgb;
