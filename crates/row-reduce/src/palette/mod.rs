//! Palette registry and bit depth selection
//!
//! This module provides the ordered output palette and the packed bit
//! depth derived from its length.

mod bit_depth;
mod error;
mod palette;

pub use bit_depth::BitDepth;
pub use error::PaletteError;
pub use palette::{Palette, BLACK_INDEX, MAX_COLORS, WHITE_INDEX};
