//! Seams between the draw controller and the window system.

use std::fmt::Debug;

use crate::error::DrawError;
use crate::model::{GlyphMask, RingArc};

/// The drawing handle: a 2D surface with a current source colour.
pub trait Canvas {
    /// Set the colour used by subsequent glyph and arc operations.
    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64);

    /// Paint the current source through `glyph`'s alpha, top-left at `(x, y)`.
    fn mask_glyph(&mut self, glyph: &GlyphMask, x: i32, y: i32);

    /// Stroke `arc` with round caps.
    fn stroke_arc(&mut self, arc: &RingArc, line_width: f64);

    /// Make every pixel transparent.
    fn clear(&mut self);

    /// Reallocate the backing store for a new window size.
    fn resize(&mut self, width: u32, height: u32);

    /// Push pending pixels to the screen.
    fn flush(&mut self) -> Result<(), DrawError>;
}

/// The display connection, as far as the controller needs it.
pub trait Display {
    type Window: Copy + Debug;

    /// Reset `window` to its background.
    fn clear_window(&self, window: Self::Window) -> Result<(), DrawError>;
}
