use row_reduce::{PaletteError, ReduceError, ThresholdError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Reduction error: {0}")]
    Reduce(#[from] ReduceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("RGB buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Source ended after {actual} of {expected} rows")]
    MissingRows { expected: u32, actual: u32 },

    #[error("Source error: {0}")]
    Source(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PaletteError> for ConvertError {
    fn from(e: PaletteError) -> Self {
        ConvertError::Reduce(e.into())
    }
}

impl From<ThresholdError> for ConvertError {
    fn from(e: ThresholdError) -> Self {
        ConvertError::Reduce(e.into())
    }
}

impl From<png::EncodingError> for ConvertError {
    fn from(e: png::EncodingError) -> Self {
        ConvertError::PngEncode(e.to_string())
    }
}
