//! Ordered, deduplicated palette registry.
//!
//! Index 0 is the white slot and index 1 the black slot. Both always
//! exist; further colors are appended in insertion order and keep their
//! index for the rest of the run.

use super::bit_depth::BitDepth;
use super::error::PaletteError;
use crate::color::Rgb;

/// Index of the white slot.
pub const WHITE_INDEX: usize = 0;

/// Index of the black slot.
pub const BLACK_INDEX: usize = 1;

/// Maximum number of palette entries (8-bit indices).
pub const MAX_COLORS: usize = 256;

/// The set of output colors an image is reduced to.
///
/// A palette always has between 2 and 256 pairwise distinct entries.
/// Adding a color that is already present is a no-op that returns the
/// existing index, so configuration lists may repeat colors freely.
///
/// # Example
///
/// ```
/// use row_reduce::{BitDepth, Palette, Rgb};
///
/// let mut palette = Palette::new();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.bit_depth(), BitDepth::One);
///
/// let red = palette.add_color(Rgb::new(255, 0, 0)).unwrap();
/// assert_eq!(red, 2);
/// assert_eq!(palette.bit_depth(), BitDepth::Two);
///
/// // Adding white again returns its existing slot
/// assert_eq!(palette.add_color(Rgb::WHITE).unwrap(), 0);
/// assert_eq!(palette.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// The default two-entry palette: white at 0, black at 1.
    pub fn new() -> Self {
        Self {
            colors: vec![Rgb::WHITE, Rgb::BLACK],
        }
    }

    /// A two-entry palette with custom colors in the white and black slots.
    ///
    /// The slots keep their roles: index 0 receives bright pixels and
    /// index 1 dark pixels, whatever colors they hold.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateColor`] if both colors are equal.
    pub fn with_base(white: Rgb, black: Rgb) -> Result<Self, PaletteError> {
        if white == black {
            return Err(PaletteError::DuplicateColor {
                index: BLACK_INDEX,
                color: black.to_bytes(),
            });
        }
        Ok(Self {
            colors: vec![white, black],
        })
    }

    /// The default palette extended with `extra` colors, in order.
    ///
    /// Repeated colors are folded into their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::PaletteFull`] if more than 256 distinct
    /// colors result.
    pub fn from_colors<I>(extra: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = Rgb>,
    {
        let mut palette = Self::new();
        for color in extra {
            palette.add_color(color)?;
        }
        Ok(palette)
    }

    /// Register a color and return its index.
    ///
    /// If an identical color is already registered, its index is
    /// returned and the palette is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::PaletteFull`] when a new color would be
    /// the 257th entry.
    pub fn add_color(&mut self, color: Rgb) -> Result<usize, PaletteError> {
        if let Some(index) = self.index_of(color) {
            return Ok(index);
        }
        if self.colors.len() >= MAX_COLORS {
            return Err(PaletteError::PaletteFull { max: MAX_COLORS });
        }
        self.colors.push(color);
        Ok(self.colors.len() - 1)
    }

    /// Index of an exactly matching color, if registered.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.colors.iter().position(|&c| c == color)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: the white and black slots cannot be removed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn color_at(&self, index: usize) -> Rgb {
        self.colors[index]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Bits per pixel needed to store any index of this palette.
    #[inline]
    pub fn bit_depth(&self) -> BitDepth {
        BitDepth::for_len(self.colors.len())
    }

    /// True for exactly the default {white, black} palette.
    ///
    /// Such a palette can be written as 1-bit grayscale instead of an
    /// indexed image.
    pub fn is_default_bilevel(&self) -> bool {
        self.colors == [Rgb::WHITE, Rgb::BLACK]
    }

    /// Flat `[R, G, B, R, G, B, ...]` table, as used by a PNG PLTE chunk.
    pub fn to_plte(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_bytes()).collect()
    }

    /// Find the palette entry with the smallest squared RGB distance.
    ///
    /// Returns `(index, distance)`. On ties the lowest index wins, so
    /// results depend on insertion order and nothing else.
    ///
    /// # Example
    ///
    /// ```
    /// use row_reduce::{Palette, Rgb};
    ///
    /// let palette = Palette::from_colors([Rgb::new(255, 0, 0)]).unwrap();
    /// let (idx, dist) = palette.find_nearest(Rgb::new(250, 0, 0));
    /// assert_eq!((idx, dist), (2, 25));
    /// ```
    #[inline]
    pub fn find_nearest(&self, pixel: Rgb) -> (usize, u32) {
        // Linear scan; strict comparison keeps the first minimum
        let mut best_idx = 0;
        let mut best_dist = pixel.distance_squared(self.colors[0]);

        for (i, &color) in self.colors.iter().enumerate().skip(1) {
            let dist = pixel.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Construction tests
    #[test]
    fn test_default_palette() {
        let palette = Palette::new();
        assert_eq!(palette.len(), 2);
        assert!(!palette.is_empty());
        assert_eq!(palette.color_at(WHITE_INDEX), Rgb::WHITE);
        assert_eq!(palette.color_at(BLACK_INDEX), Rgb::BLACK);
        assert!(palette.is_default_bilevel());
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_with_base_overrides_values() {
        let palette = Palette::with_base(Rgb::new(250, 240, 220), Rgb::new(20, 20, 60)).unwrap();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.color_at(0), Rgb::new(250, 240, 220));
        assert_eq!(palette.color_at(1), Rgb::new(20, 20, 60));
        assert!(!palette.is_default_bilevel());
    }

    #[test]
    fn test_with_base_rejects_equal_slots() {
        let result = Palette::with_base(Rgb::new(7, 7, 7), Rgb::new(7, 7, 7));
        assert!(matches!(
            result,
            Err(PaletteError::DuplicateColor { index: 1, .. })
        ));
    }

    // add_color tests
    #[test]
    fn test_add_color_assigns_insertion_order() {
        let mut palette = Palette::new();
        assert_eq!(palette.add_color(Rgb::new(255, 0, 0)).unwrap(), 2);
        assert_eq!(palette.add_color(Rgb::new(0, 255, 0)).unwrap(), 3);
        assert_eq!(palette.add_color(Rgb::new(0, 0, 255)).unwrap(), 4);
        assert_eq!(palette.color_at(3), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_add_duplicate_returns_existing_index() {
        let mut palette = Palette::new();
        palette.add_color(Rgb::new(255, 0, 0)).unwrap();
        let before = palette.len();

        assert_eq!(palette.add_color(Rgb::new(255, 0, 0)).unwrap(), 2);
        assert_eq!(palette.add_color(Rgb::BLACK).unwrap(), 1);
        assert_eq!(palette.add_color(Rgb::WHITE).unwrap(), 0);
        assert_eq!(palette.len(), before);
    }

    #[test]
    fn test_palette_full() {
        let mut palette = Palette::new();
        // 254 distinct greys besides 0 and 255 fill the palette
        for v in 1..=254u8 {
            palette.add_color(Rgb::new(v, v, v)).unwrap();
        }
        assert_eq!(palette.len(), MAX_COLORS);
        assert_eq!(palette.bit_depth(), BitDepth::Eight);

        let result = palette.add_color(Rgb::new(1, 2, 3));
        assert_eq!(result, Err(PaletteError::PaletteFull { max: 256 }));
        assert_eq!(palette.len(), MAX_COLORS);

        // Known colors still resolve once full
        assert_eq!(palette.add_color(Rgb::new(9, 9, 9)).unwrap(), 10);
    }

    #[test]
    fn test_from_colors_folds_duplicates() {
        let palette = Palette::from_colors([
            Rgb::new(255, 0, 0),
            Rgb::WHITE,
            Rgb::new(255, 0, 0),
            Rgb::new(0, 0, 255),
        ])
        .unwrap();
        assert_eq!(
            palette.colors(),
            &[Rgb::WHITE, Rgb::BLACK, Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_bit_depth_follows_length() {
        let mut palette = Palette::new();
        assert_eq!(palette.bit_depth(), BitDepth::One);
        palette.add_color(Rgb::new(1, 0, 0)).unwrap();
        assert_eq!(palette.bit_depth(), BitDepth::Two);
        palette.add_color(Rgb::new(2, 0, 0)).unwrap();
        assert_eq!(palette.bit_depth(), BitDepth::Two);
        palette.add_color(Rgb::new(3, 0, 0)).unwrap();
        assert_eq!(palette.bit_depth(), BitDepth::Four);
    }

    #[test]
    fn test_to_plte() {
        let palette = Palette::from_colors([Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(palette.to_plte(), vec![255, 255, 255, 0, 0, 0, 1, 2, 3]);
    }

    // find_nearest tests
    #[test]
    fn test_find_nearest_exact_match() {
        let palette = Palette::from_colors([Rgb::new(10, 200, 30)]).unwrap();
        assert_eq!(palette.find_nearest(Rgb::new(10, 200, 30)), (2, 0));
        assert_eq!(palette.find_nearest(Rgb::WHITE), (0, 0));
        assert_eq!(palette.find_nearest(Rgb::BLACK), (1, 0));
    }

    #[test]
    fn test_find_nearest_tie_prefers_lowest_index() {
        let palette = Palette::from_colors([Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap();

        // (128, 128, 0) is 127² + 128² away from both red and green
        let pixel = Rgb::new(128, 128, 0);
        assert_eq!(
            pixel.distance_squared(Rgb::new(255, 0, 0)),
            pixel.distance_squared(Rgb::new(0, 255, 0))
        );
        let (idx, dist) = palette.find_nearest(pixel);
        assert_eq!(idx, 2, "tie must resolve to the earlier entry");
        assert_eq!(dist, 127 * 127 + 128 * 128);
    }

    #[test]
    fn test_find_nearest_tie_follows_insertion_order() {
        // Same colors, reversed registration: the winner flips
        let palette = Palette::from_colors([Rgb::new(0, 255, 0), Rgb::new(255, 0, 0)]).unwrap();
        let (idx, _) = palette.find_nearest(Rgb::new(128, 128, 0));
        assert_eq!(palette.color_at(idx), Rgb::new(0, 255, 0));
    }
}
