//! 8-bit RGB color type
//!
//! Decoders hand over rows of interleaved 8-bit samples, and palettes are
//! stored in the same form, so every comparison in the pipeline is plain
//! integer arithmetic on these three bytes.

/// A color with three 8-bit components.
///
/// Used both for palette entries and for pixels read from an input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure white, the default color of palette index 0.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Pure black, the default color of palette index 1.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its components.
    ///
    /// # Example
    /// ```
    /// use row_reduce::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Channels are weighted equally and no gamma decoding is applied.
    /// The maximum value is `3 * 255²`, which fits comfortably in `u32`.
    ///
    /// # Example
    /// ```
    /// use row_reduce::Rgb;
    /// assert_eq!(Rgb::BLACK.distance_squared(Rgb::new(3, 4, 0)), 25);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}
