//! Recording doubles for the draw controller seams.
#![allow(dead_code)]

use std::cell::Cell;

use slock_cover::model::{GlyphMask, RingArc, SurfaceDescriptor};
use slock_cover::ui::overlay::{Canvas, Display, DrawContext, InitTarget};
use slock_cover::DrawError;

pub const WINDOW: u32 = 0x0040_0001;

/// Everything the controller asked the canvas to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Source(f64, f64, f64, f64),
    Glyph { x: i32, y: i32 },
    Arc(RingArc, f64),
    Clear,
    Resize(u32, u32),
    Flush,
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<Call>,
}

impl RecordingCanvas {
    pub fn arcs(&self) -> Vec<RingArc> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Arc(arc, _) => Some(*arc),
                _ => None,
            })
            .collect()
    }

    /// Alpha (0..=255) of the source in effect for each stroked arc.
    pub fn arc_alphas(&self) -> Vec<u8> {
        let mut alpha = None;
        let mut out = Vec::new();
        for call in &self.calls {
            match call {
                Call::Source(_, _, _, a) => alpha = Some((a * 255.0).round() as u8),
                Call::Arc(..) => out.push(alpha.expect("arc stroked before any source")),
                _ => {}
            }
        }
        out
    }

    pub fn count(&self, wanted: &Call) -> usize {
        self.calls.iter().filter(|c| *c == wanted).count()
    }
}

impl Canvas for RecordingCanvas {
    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.calls.push(Call::Source(red, green, blue, alpha));
    }

    fn mask_glyph(&mut self, _glyph: &GlyphMask, x: i32, y: i32) {
        self.calls.push(Call::Glyph { x, y });
    }

    fn stroke_arc(&mut self, arc: &RingArc, line_width: f64) {
        self.calls.push(Call::Arc(*arc, line_width));
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(Call::Resize(width, height));
    }

    fn flush(&mut self) -> Result<(), DrawError> {
        self.calls.push(Call::Flush);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub clears: Cell<u32>,
}

impl Display for RecordingDisplay {
    type Window = u32;

    fn clear_window(&self, window: u32) -> Result<(), DrawError> {
        assert_eq!(window, WINDOW);
        self.clears.set(self.clears.get() + 1);
        Ok(())
    }
}

pub type TestContext = DrawContext<RecordingCanvas, RecordingDisplay>;

pub fn glyph(width: u32, height: u32) -> GlyphMask {
    GlyphMask::new(width, height, vec![255; (width * height) as usize]).unwrap()
}

pub fn surface(width: u32, height: u32) -> SurfaceDescriptor {
    SurfaceDescriptor::new(width, height, glyph(100, 120))
}

/// Context with all four slots filled: 1920x1081 window, 100x120 glyph.
pub fn ready_context() -> TestContext {
    let mut ctx = TestContext::new();
    ctx.init(InitTarget::Canvas(RecordingCanvas::default()));
    ctx.init(InitTarget::Surface(surface(1920, 1081)));
    ctx.init(InitTarget::Display(RecordingDisplay::default()));
    ctx.init(InitTarget::Window(WINDOW));
    ctx
}

pub fn calls(ctx: &TestContext) -> &[Call] {
    &ctx.canvas().unwrap().calls
}

pub fn recorder(ctx: &TestContext) -> &RecordingCanvas {
    ctx.canvas().unwrap()
}

pub fn reset(ctx: &mut TestContext) {
    ctx.canvas_mut().unwrap().calls.clear();
}
