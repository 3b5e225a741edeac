//! dejpeg - reduce decoded images to small palette PNGs
//!
//! Decoded RGB scanlines are classified against a palette, packed at the
//! smallest bit depth that holds every index, and streamed into a PNG.
//! The reduction itself lives in the `row-reduce` crate; this crate adds
//! configuration, the row source/sink plumbing and the PNG writer.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::ConvertError;
pub use models::ConvertConfig;
pub use rendering::PngSink;
pub use services::{ConvertSummary, Converter, RgbBufferSource, RowSink, RowSource};
