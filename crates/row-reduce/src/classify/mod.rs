//! Pixel classification
//!
//! Maps each input pixel to a palette index using nearest-color search
//! combined with a luminance override for the white and black slots.

mod classifier;

pub use classifier::Classifier;
