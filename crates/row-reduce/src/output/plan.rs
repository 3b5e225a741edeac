//! Encoder-facing description of the reduced image.

use crate::palette::{BitDepth, Palette};

/// How packed rows should be interpreted by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// Rows hold palette indices; `plte` is the flat `[R, G, B, ...]` table.
    Indexed {
        /// Palette table in index order
        plte: Vec<u8>,
    },
    /// Rows hold 1-bit grey levels.
    ///
    /// With `invert` set, every pixel bit must be flipped once before
    /// encoding, because the packed rows use index 1 for black while
    /// grayscale uses 1 for white.
    Grayscale {
        /// Flip pixel bits before encoding
        invert: bool,
    },
}

/// Everything an encoder needs besides the packed rows themselves.
///
/// # Example
///
/// ```
/// use row_reduce::{BitDepth, ColorMode, EncodingPlan, Palette, Rgb};
///
/// let plan = EncodingPlan::new(&Palette::new(), 640, 480);
/// assert_eq!(plan.depth, BitDepth::One);
/// assert_eq!(plan.mode, ColorMode::Grayscale { invert: true });
///
/// let palette = Palette::from_colors([Rgb::new(255, 0, 0)]).unwrap();
/// let plan = EncodingPlan::new(&palette, 640, 480);
/// assert_eq!(plan.depth, BitDepth::Two);
/// assert!(matches!(plan.mode, ColorMode::Indexed { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingPlan {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bits per pixel of every packed row
    pub depth: BitDepth,
    /// Color interpretation of the packed rows
    pub mode: ColorMode,
}

impl EncodingPlan {
    /// Derive the plan for a palette and image size.
    ///
    /// The default {white, black} palette is written as inverted 1-bit
    /// grayscale. Every other palette, including a two-entry palette with
    /// custom colors, is written as indexed color with a PLTE table.
    pub fn new(palette: &Palette, width: u32, height: u32) -> Self {
        let depth = palette.bit_depth();
        let mode = if depth == BitDepth::One && palette.is_default_bilevel() {
            ColorMode::Grayscale { invert: true }
        } else {
            ColorMode::Indexed {
                plte: palette.to_plte(),
            }
        };
        Self {
            width,
            height,
            depth,
            mode,
        }
    }

    /// Bytes per packed row.
    pub fn row_bytes(&self) -> usize {
        crate::pack::PackedRow::row_bytes(self.width as usize, self.depth)
    }

    /// True when rows must be inverted before encoding.
    pub fn needs_invert(&self) -> bool {
        matches!(self.mode, ColorMode::Grayscale { invert: true })
    }
}
