use crate::error::ConvertError;
use crate::services::RowSource;

/// Row source over an in-memory, tightly packed RGB8 image.
pub struct RgbBufferSource<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    next: u32,
}

impl<'a> RgbBufferSource<'a> {
    /// Wrap `data`, which must hold exactly `width * height * 3` bytes
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ConvertError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .ok_or(ConvertError::BufferSize {
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(ConvertError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            next: 0,
        })
    }
}

impl RowSource for RgbBufferSource<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read_row(&mut self, row: &mut [u8]) -> Result<bool, ConvertError> {
        if self.next >= self.height {
            return Ok(false);
        }
        let stride = self.width as usize * 3;
        if row.len() != stride {
            return Err(ConvertError::BufferSize {
                expected: stride,
                actual: row.len(),
            });
        }
        let start = self.next as usize * stride;
        row.copy_from_slice(&self.data[start..start + stride]);
        self.next += 1;
        Ok(true)
    }
}
