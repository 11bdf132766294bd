//! Overlay drawing module.
//!
//! - [`controller`]: `DrawContext`, requests and their ordering
//! - [`canvas`]: the `Canvas` and `Display` seams
//! - [`renderer`]: tiny-skia `PixmapCanvas`
//! - [`glyph`]: lock image loading

pub mod canvas;
pub mod controller;
pub mod glyph;
pub mod renderer;

pub use canvas::{Canvas, Display};
pub use controller::{DrawContext, DrawOp, DrawOutcome, InitTarget, Request};
pub use glyph::load_lock_glyph;
pub use renderer::{arc_path, PixmapCanvas};
