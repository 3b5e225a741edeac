//! RowPipeline -- the per-scanline entry point for the crate.
//!
//! [`RowPipeline`] owns the read-only palette and threshold for a run and
//! turns one row of RGB pixels into one [`PackedRow`].

use crate::classify::Classifier;
use crate::color::{Rgb, Threshold};
use crate::output::EncodingPlan;
use crate::pack::PackedRow;
use crate::palette::{BitDepth, Palette};

use super::ReduceError;

/// Converts RGB scanlines into packed palette-index rows.
///
/// # Design
///
/// - Constructor requires a [`Palette`]; the threshold defaults to 50%
/// - Configuration methods consume and return `self`
/// - Processing takes `&self` and carries no state between rows, so one
///   pipeline serves every row of an image, in any order
///
/// # Example
///
/// ```
/// use row_reduce::{Palette, Rgb, RowPipeline, Threshold};
///
/// let pipeline = RowPipeline::new(Palette::new())
///     .threshold(Threshold::from_percent(50.0).unwrap());
///
/// let row = [Rgb::BLACK, Rgb::WHITE, Rgb::BLACK];
/// let packed = pipeline.process(&row).unwrap();
/// assert_eq!(packed.as_bytes(), &[0b1010_0000]);
/// ```
#[derive(Debug, Clone)]
pub struct RowPipeline {
    palette: Palette,
    threshold: Threshold,
}

impl RowPipeline {
    /// Create a pipeline with the default 50% threshold.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            threshold: Threshold::DEFAULT,
        }
    }

    /// Set the luminance threshold.
    #[inline]
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// The palette rows are reduced to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The configured luminance threshold.
    #[inline]
    pub fn luminance_threshold(&self) -> Threshold {
        self.threshold
    }

    /// Bits per pixel of every produced row.
    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        self.palette.bit_depth()
    }

    /// Classifier over this pipeline's palette and threshold.
    #[inline]
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(&self.palette, self.threshold)
    }

    /// Encoder handoff for an image of the given size.
    pub fn encoding_plan(&self, width: u32, height: u32) -> EncodingPlan {
        EncodingPlan::new(&self.palette, width, height)
    }

    /// Reduce one row of pixels into a fresh packed row.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::Pack`] only if classification produced an
    /// index the bit depth cannot hold, which indicates a bug.
    pub fn process(&self, row: &[Rgb]) -> Result<PackedRow, ReduceError> {
        let mut out = PackedRow::new(row.len(), self.bit_depth());
        self.process_into(row, &mut out)?;
        Ok(out)
    }

    /// Reduce one row of pixels into `out`, reusing its allocation.
    ///
    /// `out` is reset before any pixel is written; nothing from a previous
    /// row survives.
    pub fn process_into(&self, row: &[Rgb], out: &mut PackedRow) -> Result<(), ReduceError> {
        let classifier = self.classifier();
        out.reset(row.len(), self.bit_depth());
        for (x, &pixel) in row.iter().enumerate() {
            out.set(x, classifier.classify(pixel))?;
        }
        Ok(())
    }

    /// Reduce one row of interleaved 8-bit RGB samples into `out`.
    ///
    /// This is the form decoders hand rows over in: `[R, G, B, R, G, B, ...]`.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::ComponentCount`] if `samples.len()` is not a
    /// multiple of 3.
    pub fn process_rgb(&self, samples: &[u8], out: &mut PackedRow) -> Result<(), ReduceError> {
        if samples.len() % 3 != 0 {
            return Err(ReduceError::ComponentCount { len: samples.len() });
        }
        let classifier = self.classifier();
        out.reset(samples.len() / 3, self.bit_depth());
        for (x, px) in samples.chunks_exact(3).enumerate() {
            out.set(x, classifier.classify(Rgb::new(px[0], px[1], px[2])))?;
        }
        Ok(())
    }
}
