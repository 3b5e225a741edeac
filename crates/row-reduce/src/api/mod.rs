//! Public API for the row-reduce crate.
//!
//! This module provides the high-level API: [`RowPipeline`] and the
//! [`ReduceError`] unified error type.

mod error;
mod pipeline;

pub use error::ReduceError;
pub use pipeline::RowPipeline;
