//! Encoder handoff
//!
//! [`EncodingPlan`] tells the image encoder how to interpret packed rows:
//! dimensions, bit depth, and either a palette table or a grayscale
//! inversion flag.

mod plan;

pub use plan::{ColorMode, EncodingPlan};
