//! Bits per pixel for packed output rows.

/// Number of bits used to store one palette index in a packed row.
///
/// Always derived from a palette length, never configured directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitDepth {
    /// 1 bit per pixel, up to 2 colors
    One,
    /// 2 bits per pixel, up to 4 colors
    Two,
    /// 4 bits per pixel, up to 16 colors
    Four,
    /// 8 bits per pixel, up to 256 colors
    Eight,
}

impl BitDepth {
    /// Smallest depth whose capacity holds `len` colors.
    ///
    /// # Example
    /// ```
    /// use row_reduce::BitDepth;
    ///
    /// assert_eq!(BitDepth::for_len(2), BitDepth::One);
    /// assert_eq!(BitDepth::for_len(5), BitDepth::Four);
    /// assert_eq!(BitDepth::for_len(17), BitDepth::Eight);
    /// ```
    pub fn for_len(len: usize) -> Self {
        match len {
            0..=2 => BitDepth::One,
            3..=4 => BitDepth::Two,
            5..=16 => BitDepth::Four,
            _ => BitDepth::Eight,
        }
    }

    /// Bits per pixel.
    #[inline]
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Four => 4,
            BitDepth::Eight => 8,
        }
    }

    /// How many pixels share one byte.
    #[inline]
    pub fn pixels_per_byte(self) -> usize {
        8 / self.bits() as usize
    }

    /// log2 of [`pixels_per_byte`](Self::pixels_per_byte).
    ///
    /// A pixel position shifted right by this value gives its byte offset.
    #[inline]
    pub fn divide_shift(self) -> u32 {
        match self {
            BitDepth::One => 3,
            BitDepth::Two => 2,
            BitDepth::Four => 1,
            BitDepth::Eight => 0,
        }
    }

    /// Shift of the first (most significant) pixel in a byte.
    #[inline]
    pub fn max_shift(self) -> u8 {
        8 - self.bits()
    }

    /// Number of distinct indices representable, `2^bits`.
    #[inline]
    pub fn capacity(self) -> usize {
        1 << self.bits()
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}
