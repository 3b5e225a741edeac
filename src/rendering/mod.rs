pub mod png_sink;

pub use png_sink::PngSink;
