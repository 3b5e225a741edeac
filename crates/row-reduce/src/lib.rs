//! row-reduce: palette reduction and sub-byte row packing
//!
//! This library turns decoded RGB scanlines into packed rows of palette
//! indices at 1, 2, 4 or 8 bits per pixel, ready for an indexed or
//! grayscale image encoder.
//!
//! # Quick Start
//!
//! The [`RowPipeline`] is the primary entry point:
//!
//! ```
//! use row_reduce::{Palette, Rgb, RowPipeline, Threshold};
//!
//! let palette = Palette::from_colors([Rgb::new(255, 0, 0)]).unwrap();
//! let pipeline = RowPipeline::new(palette)
//!     .threshold(Threshold::from_percent(60.0).unwrap());
//!
//! let row = [Rgb::new(250, 5, 5), Rgb::BLACK, Rgb::WHITE];
//! let packed = pipeline.process(&row).unwrap();
//!
//! // Three colors need 2 bits per pixel: indices 2, 1, 0
//! assert_eq!(packed.as_bytes(), &[0b10_01_00_00]);
//! ```
//!
//! # Classification
//!
//! Every pixel goes through two steps:
//!
//! ```text
//! pixel (R, G, B)
//!     |
//!     v
//! palette.len() > 2 ? ----no----+
//!     | yes                     |
//!     v                         |
//! nearest color                 |
//! (squared RGB distance,        |
//!  lowest index on ties)        |
//!     |                         |
//!     v                         v
//! index >= 2 ? --yes--> keep    luma = 2126 R + 7152 G + 722 B
//!     | no                      |
//!     +------------------------>+
//!                               v
//!                    luma <= threshold ? 1 (black) : 0 (white)
//! ```
//!
//! The white and black slots (indices 0 and 1) are decided by perceived
//! brightness, while additional palette colors are matched by distance
//! only. A two-color palette never runs the distance search.
//!
//! # Packing
//!
//! [`BitDepth`] is the smallest of 1, 2, 4 or 8 bits that holds every
//! palette index. Rows are packed MSB-first, so the leftmost pixel of a
//! byte occupies its highest bits, and trailing bits of the last byte
//! stay zero. See [`PackedRow`].
//!
//! # Encoder Handoff
//!
//! [`EncodingPlan`] describes the output for an encoder. The default
//! {white, black} palette is written as 1-bit grayscale, which needs each
//! row inverted once ([`PackedRow::invert`]) because grayscale stores
//! white as 1. Any other palette is written as indexed color with a
//! PLTE table.

pub mod api;
pub mod classify;
pub mod color;
pub mod output;
pub mod pack;
pub mod palette;


pub use api::{ReduceError, RowPipeline};
pub use classify::Classifier;
pub use color::{Rgb, Threshold, ThresholdError};
pub use output::{ColorMode, EncodingPlan};
pub use pack::{pack, pack_into, PackError, PackedRow};
pub use palette::{BitDepth, Palette, PaletteError};
