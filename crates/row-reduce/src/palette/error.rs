//! Error types for palette construction

use thiserror::Error;

/// Error type for palette registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A distinct color was added after all 256 slots were taken
    #[error("too many colors for palette (max {max})")]
    PaletteFull {
        /// Maximum palette length
        max: usize,
    },
    /// The white and black slots were given the same color
    #[error("duplicate color {color:?} for palette slot {index}")]
    DuplicateColor {
        /// Slot that repeated an earlier entry
        index: usize,
        /// The repeated color as [R, G, B]
        color: [u8; 3],
    },
}
