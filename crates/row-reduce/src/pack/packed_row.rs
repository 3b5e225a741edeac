//! Sub-byte row packing.
//!
//! Indices are stored MSB-first: with `pixels_per_byte = 8 / bits`, pixel
//! `x` lands in byte `x / pixels_per_byte` at shift
//! `(8 - bits) - bits * (x % pixels_per_byte)`.
//!
//! ```text
//! bits = 2, pixels a b c d e
//!
//!   byte 0               byte 1
//!   a1 a0 b1 b0 c1 c0 d1 d0   e1 e0 0 0 0 0 0 0
//! ```
//!
//! Unused trailing bits in the last byte stay zero.

use super::error::PackError;
use crate::palette::BitDepth;

/// One scanline of palette indices packed at a fixed bit depth.
///
/// The buffer is exactly `ceil(width * bits / 8)` bytes long. A row can
/// be reused across scanlines with [`reset`](PackedRow::reset), which
/// zeroes every byte before the next pixel is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedRow {
    bytes: Vec<u8>,
    width: usize,
    depth: BitDepth,
}

impl PackedRow {
    /// A zeroed row for `width` pixels.
    pub fn new(width: usize, depth: BitDepth) -> Self {
        Self {
            bytes: vec![0; Self::row_bytes(width, depth)],
            width,
            depth,
        }
    }

    /// Bytes needed for `width` pixels at `depth`.
    ///
    /// # Example
    /// ```
    /// use row_reduce::{BitDepth, PackedRow};
    ///
    /// assert_eq!(PackedRow::row_bytes(10, BitDepth::One), 2);
    /// assert_eq!(PackedRow::row_bytes(3, BitDepth::Four), 2);
    /// assert_eq!(PackedRow::row_bytes(3, BitDepth::Eight), 3);
    /// ```
    #[inline]
    pub fn row_bytes(width: usize, depth: BitDepth) -> usize {
        (width * depth.bits() as usize).div_ceil(8)
    }

    /// Clear the row and size it for `width` pixels at `depth`.
    ///
    /// Keeps the allocation when the size does not grow.
    pub fn reset(&mut self, width: usize, depth: BitDepth) {
        self.bytes.clear();
        self.bytes.resize(Self::row_bytes(width, depth), 0);
        self.width = width;
        self.depth = depth;
    }

    /// Make this row an exact copy of `other`, reusing the allocation.
    pub fn copy_from(&mut self, other: &PackedRow) {
        self.bytes.clear();
        self.bytes.extend_from_slice(&other.bytes);
        self.width = other.width;
        self.depth = other.depth;
    }

    /// Row width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bits per pixel.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// The packed bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the row, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// OR an index into pixel position `x`.
    ///
    /// Positions must be written at most once after a reset, since bits
    /// are only ever set.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::IndexOutOfRange`] if `index` needs more bits
    /// than the row's depth.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.width()`.
    #[inline]
    pub fn set(&mut self, x: usize, index: u8) -> Result<(), PackError> {
        assert!(x < self.width, "pixel {} outside row of {}", x, self.width);
        let depth = self.depth;
        if index as usize >= depth.capacity() {
            return Err(PackError::IndexOutOfRange {
                index,
                position: x,
                bits: depth.bits(),
            });
        }
        // Index 0 is all-zero bits; nothing to write
        if index != 0 {
            self.bytes[x >> depth.divide_shift()] |= index << Self::shift(x, depth);
        }
        Ok(())
    }

    /// Read back the index at pixel position `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= self.width()`.
    #[inline]
    pub fn get(&self, x: usize) -> u8 {
        assert!(x < self.width, "pixel {} outside row of {}", x, self.width);
        let depth = self.depth;
        let mask = ((1u16 << depth.bits()) - 1) as u8;
        (self.bytes[x >> depth.divide_shift()] >> Self::shift(x, depth)) & mask
    }

    /// Flip every pixel bit, leaving padding bits zero.
    ///
    /// Used when a 1-bit row is written as grayscale, where 0 is black,
    /// instead of as palette indices, where index 1 is black.
    pub fn invert(&mut self) {
        for byte in &mut self.bytes {
            *byte = !*byte;
        }
        let used_bits = self.width * self.depth.bits() as usize;
        let padding = self.bytes.len() * 8 - used_bits;
        if let Some(last) = self.bytes.last_mut() {
            *last &= 0xFFu8 << padding;
        }
    }

    #[inline]
    fn shift(x: usize, depth: BitDepth) -> u8 {
        let within = x & (depth.pixels_per_byte() - 1);
        depth.max_shift() - depth.bits() * within as u8
    }
}

impl AsRef<[u8]> for PackedRow {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Pack a row of palette indices at `depth`.
///
/// # Errors
///
/// Returns [`PackError::IndexOutOfRange`] for any index that needs more
/// than `depth` bits.
///
/// # Example
/// ```
/// use row_reduce::{pack, BitDepth};
///
/// let row = pack(&[15, 0, 7], BitDepth::Four).unwrap();
/// assert_eq!(row.as_bytes(), &[0xF0, 0x70]);
/// ```
pub fn pack(indices: &[u8], depth: BitDepth) -> Result<PackedRow, PackError> {
    let mut row = PackedRow::new(indices.len(), depth);
    write_indices(indices, &mut row)?;
    Ok(row)
}

/// Pack a row of palette indices into an existing buffer.
///
/// `row` is reset to `indices.len()` pixels at `depth` first, so stale
/// bits from a previous scanline never leak into this one.
///
/// # Errors
///
/// Same as [`pack`]. On error the buffer contents are unspecified.
pub fn pack_into(indices: &[u8], depth: BitDepth, row: &mut PackedRow) -> Result<(), PackError> {
    row.reset(indices.len(), depth);
    write_indices(indices, row)
}

fn write_indices(indices: &[u8], row: &mut PackedRow) -> Result<(), PackError> {
    for (x, &index) in indices.iter().enumerate() {
        row.set(x, index)?;
    }
    Ok(())
}
