//! Error type for row packing

use thiserror::Error;

/// Error type for row packing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// An index does not fit in the row's bit depth.
    ///
    /// The classifier never produces such an index for its own palette,
    /// so this signals a mismatched palette/depth pairing.
    #[error("palette index {index} at pixel {position} does not fit in {bits} bits")]
    IndexOutOfRange {
        /// The offending index
        index: u8,
        /// Pixel position within the row
        position: usize,
        /// Bits per pixel of the row
        bits: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let error = PackError::IndexOutOfRange {
            index: 4,
            position: 17,
            bits: 2,
        };
        assert_eq!(
            error.to_string(),
            "palette index 4 at pixel 17 does not fit in 2 bits"
        );
    }
}
