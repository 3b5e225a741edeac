//! Packed row buffers
//!
//! Stores classified palette indices at 1, 2, 4 or 8 bits per pixel,
//! MSB-first, in the layout indexed and grayscale image encoders expect.

mod error;
mod packed_row;

pub use error::PackError;
pub use packed_row::{pack, pack_into, PackedRow};
