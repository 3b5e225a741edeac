pub mod converter;
pub mod source;

use row_reduce::PackedRow;

use crate::error::ConvertError;

pub use converter::{ConvertSummary, Converter};
pub use source::RgbBufferSource;

/// Supplies decoded scanlines, top to bottom.
pub trait RowSource {
    /// Image width in pixels
    fn width(&self) -> u32;

    /// Image height in rows
    fn height(&self) -> u32;

    /// Fill `row` with the next scanline as interleaved 8-bit RGB.
    ///
    /// `row` is exactly `width * 3` bytes. Returns `Ok(false)` once the
    /// source has no rows left.
    fn read_row(&mut self, row: &mut [u8]) -> Result<bool, ConvertError>;
}

/// Accepts packed rows in image order.
pub trait RowSink {
    fn write_row(&mut self, row: &PackedRow) -> Result<(), ConvertError>;
}

impl<K: RowSink + ?Sized> RowSink for &mut K {
    fn write_row(&mut self, row: &PackedRow) -> Result<(), ConvertError> {
        (**self).write_row(row)
    }
}
