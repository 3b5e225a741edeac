//! Assertion helpers for tests.

use std::io::Cursor;

use pretty_assertions::assert_eq;

/// A PNG decoded without any transformations
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    pub palette: Option<Vec<u8>>,
    pub line_size: usize,
    pub data: Vec<u8>,
}

impl DecodedPng {
    /// Raw bytes of row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.line_size..(y + 1) * self.line_size]
    }
}

/// Assert `bytes` is a well-formed PNG and decode it
pub fn assert_png(bytes: &[u8]) -> DecodedPng {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG signature, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );

    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("PNG header should decode");
    let palette = reader.info().palette.as_ref().map(|p| p.to_vec());
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).expect("PNG data should decode");
    data.truncate(info.buffer_size());

    DecodedPng {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        palette,
        line_size: info.line_size,
        data,
    }
}

/// Assert the PNG is 1-bit grayscale with no PLTE chunk
pub fn assert_bilevel_grayscale(png: &DecodedPng) {
    assert_eq!(png.color_type, png::ColorType::Grayscale);
    assert_eq!(png.bit_depth, png::BitDepth::One);
    assert!(png.palette.is_none(), "grayscale PNG must not carry PLTE");
}

/// Assert the PNG is indexed at `bit_depth` with exactly `colors` as PLTE
pub fn assert_indexed(png: &DecodedPng, bit_depth: png::BitDepth, colors: &[[u8; 3]]) {
    assert_eq!(png.color_type, png::ColorType::Indexed);
    assert_eq!(png.bit_depth, bit_depth);
    let expected: Vec<u8> = colors.iter().flatten().copied().collect();
    assert_eq!(png.palette.as_deref(), Some(expected.as_slice()));
}
