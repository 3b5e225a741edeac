//! Test fixtures and constants.

use dejpeg::{ConvertError, RowSource};

/// Colors used across tests
pub mod colors {
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const MID_GREY: [u8; 3] = [128, 128, 128];
    pub const DARK_GREY: [u8; 3] = [60, 60, 60];
    pub const LIGHT_GREY: [u8; 3] = [200, 200, 200];
}

/// Interleaved RGB8 image from rows of pixels
pub fn rgb_image(rows: &[&[[u8; 3]]]) -> (Vec<u8>, u32, u32) {
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    assert!(
        rows.iter().all(|r| r.len() == width),
        "all fixture rows must have the same width"
    );
    let data = rows.iter().flat_map(|r| r.iter().flatten().copied()).collect();
    (data, width as u32, rows.len() as u32)
}

/// Horizontal grey ramp from black to white, repeated on every row
pub fn grey_ramp(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.saturating_sub(1).max(1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    data
}

/// Source that announces more rows than it delivers
pub struct TruncatedSource {
    pub width: u32,
    pub height: u32,
    pub delivered: u32,
    pub available: u32,
}

impl TruncatedSource {
    pub fn new(width: u32, height: u32, available: u32) -> Self {
        Self {
            width,
            height,
            delivered: 0,
            available,
        }
    }
}

impl RowSource for TruncatedSource {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read_row(&mut self, row: &mut [u8]) -> Result<bool, ConvertError> {
        if self.delivered == self.available {
            return Ok(false);
        }
        self.delivered += 1;
        row.fill(255);
        Ok(true)
    }
}
