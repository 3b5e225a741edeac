use std::io::Write;

use row_reduce::{BitDepth, EncodingPlan, PackedRow, RowPipeline};

use crate::error::ConvertError;
use crate::models::ConvertConfig;
use crate::rendering::PngSink;
use crate::services::{RowSink, RowSource};

/// What a finished conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
    pub colors: usize,
    pub rows: u32,
}

/// Drives rows from a source through the reduction pipeline into a sink.
///
/// One input buffer and one packed row are allocated per run and reused
/// for every scanline.
pub struct Converter {
    pipeline: RowPipeline,
}

impl Converter {
    pub fn new(pipeline: RowPipeline) -> Self {
        Self { pipeline }
    }

    /// Build a converter from validated configuration
    pub fn from_config(config: &ConvertConfig) -> Result<Self, ConvertError> {
        Ok(Self::new(config.pipeline()?))
    }

    pub fn pipeline(&self) -> &RowPipeline {
        &self.pipeline
    }

    /// Output layout for an image of the given size.
    ///
    /// Rejects images with no pixels.
    pub fn plan(&self, width: u32, height: u32) -> Result<EncodingPlan, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::EmptyImage { width, height });
        }
        Ok(self.pipeline.encoding_plan(width, height))
    }

    /// Convert every row of `source` and hand it to `sink`.
    ///
    /// Stops at the first error. A source that runs out before its
    /// announced height fails with [`ConvertError::MissingRows`].
    pub fn run<S, K>(&self, source: &mut S, sink: &mut K) -> Result<ConvertSummary, ConvertError>
    where
        S: RowSource + ?Sized,
        K: RowSink + ?Sized,
    {
        let (width, height) = (source.width(), source.height());
        let plan = self.plan(width, height)?;

        tracing::info!(
            width,
            height,
            bit_depth = %plan.depth,
            colors = self.pipeline.palette().len(),
            "Converting image"
        );

        let mut input = vec![0u8; width as usize * 3];
        let mut packed = PackedRow::new(width as usize, plan.depth);

        for y in 0..height {
            if !source.read_row(&mut input)? {
                tracing::warn!(expected = height, actual = y, "Source ended early");
                return Err(ConvertError::MissingRows {
                    expected: height,
                    actual: y,
                });
            }
            self.pipeline.process_rgb(&input, &mut packed)?;
            sink.write_row(&packed)?;
        }

        tracing::debug!(rows = height, "Conversion complete");

        Ok(ConvertSummary {
            width,
            height,
            bit_depth: plan.depth,
            colors: self.pipeline.palette().len(),
            rows: height,
        })
    }

    /// Convert `source` into a PNG written to `writer`.
    ///
    /// The PNG is written only after every row converted successfully; on
    /// error `writer` receives nothing.
    pub fn convert_to_png<S, W>(
        &self,
        source: &mut S,
        writer: W,
    ) -> Result<ConvertSummary, ConvertError>
    where
        S: RowSource + ?Sized,
        W: Write,
    {
        let plan = self.plan(source.width(), source.height())?;
        let mut sink = PngSink::new(writer, &plan)?;
        let summary = self.run(source, &mut sink)?;
        sink.finish()?;
        Ok(summary)
    }
}
