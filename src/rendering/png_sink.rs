use std::io::Write;

use row_reduce::{BitDepth, ColorMode, EncodingPlan, PackedRow};

use crate::error::ConvertError;
use crate::services::RowSink;

/// Collects packed rows and encodes them as one PNG on [`finish`](PngSink::finish).
///
/// The PNG layout follows the [`EncodingPlan`]:
/// - `Grayscale` → color type 0 at 1 bit; each row is inverted once on
///   the way in, since packed rows store black as index 1
/// - `Indexed` → color type 3 with a PLTE chunk
///
/// Nothing reaches the writer until every row has arrived, so a failed
/// conversion leaves the writer untouched.
pub struct PngSink<W: Write> {
    writer: W,
    plan: EncodingPlan,
    /// Packed image data, `row_bytes * height` once complete
    data: Vec<u8>,
    /// Reused buffer for inverted grayscale rows
    scratch: PackedRow,
    rows_written: u32,
}

impl<W: Write> PngSink<W> {
    pub fn new(writer: W, plan: &EncodingPlan) -> Result<Self, ConvertError> {
        tracing::debug!(
            width = plan.width,
            height = plan.height,
            bit_depth = %plan.depth,
            invert = plan.needs_invert(),
            "Prepared PNG sink"
        );

        Ok(Self {
            writer,
            data: Vec::with_capacity(plan.row_bytes() * plan.height as usize),
            scratch: PackedRow::new(plan.width as usize, plan.depth),
            plan: plan.clone(),
            rows_written: 0,
        })
    }

    /// Number of rows accepted so far
    pub fn rows_written(&self) -> u32 {
        self.rows_written
    }

    /// Encode the collected rows and write the PNG.
    ///
    /// Fails with [`ConvertError::MissingRows`] if fewer rows than the
    /// image height arrived; the writer is not touched in that case.
    pub fn finish(mut self) -> Result<(), ConvertError> {
        if self.rows_written != self.plan.height {
            return Err(ConvertError::MissingRows {
                expected: self.plan.height,
                actual: self.rows_written,
            });
        }

        let mut encoder = png::Encoder::new(&mut self.writer, self.plan.width, self.plan.height);
        encoder.set_depth(png_depth(self.plan.depth));
        // Smallest output: best zlib level, per-row filter choice
        encoder.set_compression(png::Compression::Best);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
        match &self.plan.mode {
            ColorMode::Grayscale { .. } => encoder.set_color(png::ColorType::Grayscale),
            ColorMode::Indexed { plte } => {
                encoder.set_color(png::ColorType::Indexed);
                encoder.set_palette(plte.as_slice());
            }
        }

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.data)?;
        writer.finish()?;

        tracing::debug!(bytes = self.data.len(), "Wrote PNG image data");
        Ok(())
    }
}

impl<W: Write> RowSink for PngSink<W> {
    fn write_row(&mut self, row: &PackedRow) -> Result<(), ConvertError> {
        if self.rows_written >= self.plan.height {
            return Err(ConvertError::PngEncode(format!(
                "row {} is past the image height of {}",
                self.rows_written, self.plan.height
            )));
        }
        if row.as_bytes().len() != self.plan.row_bytes() || row.depth() != self.plan.depth {
            return Err(ConvertError::PngEncode(format!(
                "row of {} bytes at {} bits does not match {} bytes at {} bits",
                row.as_bytes().len(),
                row.depth(),
                self.plan.row_bytes(),
                self.plan.depth
            )));
        }

        if self.plan.needs_invert() {
            self.scratch.copy_from(row);
            self.scratch.invert();
            self.data.extend_from_slice(self.scratch.as_bytes());
        } else {
            self.data.extend_from_slice(row.as_bytes());
        }
        self.rows_written += 1;
        Ok(())
    }
}

/// Map a packed row depth to the PNG header depth
fn png_depth(depth: BitDepth) -> png::BitDepth {
    match depth {
        BitDepth::One => png::BitDepth::One,
        BitDepth::Two => png::BitDepth::Two,
        BitDepth::Four => png::BitDepth::Four,
        BitDepth::Eight => png::BitDepth::Eight,
    }
}
