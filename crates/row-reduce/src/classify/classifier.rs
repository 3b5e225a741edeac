//! Pixel classifier: nearest color plus the luminance override.

use crate::color::{Rgb, Threshold};
use crate::palette::{Palette, BLACK_INDEX, WHITE_INDEX};

/// Maps RGB pixels to palette indices.
///
/// Classification runs in two steps:
///
/// 1. **Nearest color.** For palettes longer than two entries, the entry
///    with the smallest squared RGB distance is chosen (lowest index on
///    ties). Two-entry palettes skip this step entirely.
/// 2. **Luminance override.** If step 1 landed on the white or black
///    slot (or was skipped), the pixel's luminance decides between them:
///    at or below the threshold it becomes black, above it white.
///    Indices 2 and up are never overridden.
///
/// The override makes the achromatic slots follow perceived brightness
/// while user colors are matched by distance alone.
///
/// # Example
///
/// ```
/// use row_reduce::{Classifier, Palette, Rgb, Threshold};
///
/// let palette = Palette::new();
/// let classifier = Classifier::new(&palette, Threshold::DEFAULT);
///
/// assert_eq!(classifier.classify(Rgb::WHITE), 0);
/// assert_eq!(classifier.classify(Rgb::BLACK), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    palette: &'a Palette,
    threshold: Threshold,
}

impl<'a> Classifier<'a> {
    /// Create a classifier over a palette and threshold.
    pub fn new(palette: &'a Palette, threshold: Threshold) -> Self {
        Self { palette, threshold }
    }

    /// The palette being classified against.
    #[inline]
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// The luminance threshold for the white/black decision.
    #[inline]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Classify one pixel. The result is always `< palette.len()`.
    #[inline]
    pub fn classify(&self, pixel: Rgb) -> u8 {
        let index = if self.palette.len() > 2 {
            self.palette.find_nearest(pixel).0
        } else {
            WHITE_INDEX
        };

        if index > BLACK_INDEX {
            return index as u8;
        }

        if self.threshold.is_dark(pixel) {
            BLACK_INDEX as u8
        } else {
            WHITE_INDEX as u8
        }
    }

    /// Classify a row of pixels into `indices`.
    ///
    /// `indices` is cleared first; on return it holds one entry per pixel.
    pub fn classify_row(&self, row: &[Rgb], indices: &mut Vec<u8>) {
        indices.clear();
        indices.extend(row.iter().map(|&pixel| self.classify(pixel)));
    }
}
