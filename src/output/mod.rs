//! Output encoders.
//!
//! Rasterized framebuffers can be exported for inspection; the rasterizer
//! itself never reads image files back.

mod png_encoder;

pub use png_encoder::PngEncoder;
