//! User interface module.
//!
//! ## overlay/
//! - controller.rs: draw-state controller (`DrawContext`, `Request`)
//! - canvas.rs: drawing and display traits
//! - renderer.rs: tiny-skia pixmap canvas
//! - glyph.rs: lock image decoding

pub mod overlay;

pub use overlay::{DrawContext, PixmapCanvas, Request};
