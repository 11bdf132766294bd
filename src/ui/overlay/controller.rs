//! Draw-state controller.
//!
//! A [`DrawContext`] owns everything the overlay draws with: the canvas, the
//! surface descriptor, the display connection, the window, the current
//! packed colour and the last lit ring segment. Callers fill the four slots
//! once with [`DrawContext::init`], then send [`Request`]s.
//!
//! A request is any subset of [`DrawOp`]s. Whatever order they were added
//! in, they run in a fixed priority order:
//!
//! ```text
//! CONFIGURE → CLEAR → SET_COLOR → SET_ALPHA → DRAW → SET_KEYBOARD → FREE
//! ```
//!
//! Preconditions for every op are checked before any op runs, so a request
//! that fails leaves the context untouched. Painting ops need all four slots.
//!
//! `apply` only paints into the canvas. [`DrawContext::present`] pushes the
//! result to the screen once, after all requests for an event are applied.

use tracing::{debug, trace, warn};

use super::canvas::{Canvas, Display};
use crate::error::{DrawError, Slot};
use crate::model::constants::RING_LINE_WIDTH;
use crate::model::{PackedColor, RingArc, Segment, SegmentChoice, SurfaceDescriptor};

/// A value handed to [`DrawContext::init`].
pub enum InitTarget<C, D: Display> {
    Canvas(C),
    Surface(SurfaceDescriptor),
    Display(D),
    Window(D::Window),
}

impl<C, D: Display> InitTarget<C, D> {
    pub fn slot(&self) -> Slot {
        match self {
            InitTarget::Canvas(_) => Slot::Canvas,
            InitTarget::Surface(_) => Slot::Surface,
            InitTarget::Display(_) => Slot::Display,
            InitTarget::Window(_) => Slot::Window,
        }
    }
}

const ALL_SLOTS: [Slot; 4] = [Slot::Canvas, Slot::Surface, Slot::Display, Slot::Window];

/// One drawing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Track a new window size if it differs from the current one.
    Configure { width: u32, height: u32 },
    /// Clear the window and the canvas.
    Clear,
    /// Replace the packed colour and the source colour.
    SetColor(PackedColor),
    /// Replace only the low (alpha) byte.
    SetAlpha(u8),
    /// Paint the glyph centred in the window.
    Draw,
    /// Stroke one ring segment.
    SetKeyboard(SegmentChoice),
    /// Release the surface descriptor.
    Free,
}

impl DrawOp {
    /// Execution rank inside a request; lower runs first.
    pub fn priority(&self) -> u8 {
        match self {
            DrawOp::Configure { .. } => 0,
            DrawOp::Clear => 1,
            DrawOp::SetColor(_) => 2,
            DrawOp::SetAlpha(_) => 3,
            DrawOp::Draw => 4,
            DrawOp::SetKeyboard(_) => 5,
            DrawOp::Free => 6,
        }
    }

    fn required_slots(&self) -> &'static [Slot] {
        match self {
            DrawOp::Configure { .. } => &[Slot::Surface],
            DrawOp::Clear => &[Slot::Display, Slot::Window],
            DrawOp::SetColor(_) | DrawOp::SetAlpha(_) | DrawOp::Draw | DrawOp::SetKeyboard(_) => {
                &ALL_SLOTS
            }
            DrawOp::Free => &[],
        }
    }
}

/// A set of operations applied together.
///
/// ```
/// use slock_cover::ui::overlay::{DrawOp, Request};
///
/// let request = Request::new().draw().clear();
/// assert_eq!(request.ordered(), vec![DrawOp::Clear, DrawOp::Draw]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    ops: Vec<DrawOp>,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    /// CLEAR + DRAW.
    pub fn redraw() -> Self {
        Self::new().clear().draw()
    }

    pub fn with(mut self, op: DrawOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn configure(self, width: u32, height: u32) -> Self {
        self.with(DrawOp::Configure { width, height })
    }

    pub fn clear(self) -> Self {
        self.with(DrawOp::Clear)
    }

    pub fn set_color(self, color: PackedColor) -> Self {
        self.with(DrawOp::SetColor(color))
    }

    pub fn set_alpha(self, alpha: u8) -> Self {
        self.with(DrawOp::SetAlpha(alpha))
    }

    pub fn draw(self) -> Self {
        self.with(DrawOp::Draw)
    }

    pub fn keyboard(self, choice: SegmentChoice) -> Self {
        self.with(DrawOp::SetKeyboard(choice))
    }

    pub fn free(self) -> Self {
        self.with(DrawOp::Free)
    }

    /// The ops in execution order (stable for equal ranks).
    pub fn ordered(&self) -> Vec<DrawOp> {
        let mut ops = self.ops.clone();
        ops.sort_by_key(DrawOp::priority);
        ops
    }
}

/// Values a request displaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Packed colour before the request's SET_COLOR.
    pub previous_color: Option<PackedColor>,
    /// Low byte before the request's SET_ALPHA.
    pub previous_alpha: Option<u8>,
}

/// Explicit draw state, threaded through the event handler and fade tick.
pub struct DrawContext<C: Canvas, D: Display> {
    canvas: Option<C>,
    surface: Option<SurfaceDescriptor>,
    display: Option<D>,
    window: Option<D::Window>,
    color: PackedColor,
    segment: Segment,
    dirty: bool,
}

impl<C: Canvas, D: Display> Default for DrawContext<C, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Canvas, D: Display> DrawContext<C, D> {
    pub fn new() -> Self {
        Self {
            canvas: None,
            surface: None,
            display: None,
            window: None,
            color: PackedColor::default(),
            segment: Segment::default(),
            dirty: false,
        }
    }

    /// Fill one slot.
    pub fn init(&mut self, target: InitTarget<C, D>) {
        debug!("init {}", target.slot());
        match target {
            InitTarget::Canvas(canvas) => self.canvas = Some(canvas),
            InitTarget::Surface(surface) => self.surface = Some(surface),
            InitTarget::Display(display) => self.display = Some(display),
            InitTarget::Window(window) => self.window = Some(window),
        }
    }

    /// True once all four slots are filled.
    pub fn is_initialized(&self) -> bool {
        self.canvas.is_some()
            && self.surface.is_some()
            && self.display.is_some()
            && self.window.is_some()
    }

    pub fn color(&self) -> PackedColor {
        self.color
    }

    /// Last explicitly selected segment.
    pub fn segment(&self) -> Segment {
        self.segment
    }

    pub fn surface(&self) -> Option<&SurfaceDescriptor> {
        self.surface.as_ref()
    }

    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn canvas_mut(&mut self) -> Option<&mut C> {
        self.canvas.as_mut()
    }

    pub fn display(&self) -> Option<&D> {
        self.display.as_ref()
    }

    pub fn window(&self) -> Option<D::Window> {
        self.window
    }

    fn has(&self, slot: Slot) -> bool {
        match slot {
            Slot::Canvas => self.canvas.is_some(),
            Slot::Surface => self.surface.is_some(),
            Slot::Display => self.display.is_some(),
            Slot::Window => self.window.is_some(),
        }
    }

    fn check(&self, ops: &[DrawOp]) -> Result<(), DrawError> {
        for op in ops {
            if let Some(missing) = op.required_slots().iter().find(|s| !self.has(**s)) {
                return Err(DrawError::Uninitialized(*missing));
            }
        }
        Ok(())
    }

    /// True when the canvas holds pixels not yet presented.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run every op in `request` in priority order.
    pub fn apply(&mut self, request: &Request) -> Result<DrawOutcome, DrawError> {
        let ops = request.ordered();
        self.check(&ops)?;

        let mut outcome = DrawOutcome::default();
        let mut dirty = false;

        for op in ops {
            trace!(?op, "apply");
            match op {
                DrawOp::Configure { width, height } => {
                    let surface = self
                        .surface
                        .as_mut()
                        .ok_or(DrawError::Uninitialized(Slot::Surface))?;
                    if surface.resize(width, height) {
                        debug!(width, height, "window resized");
                        if let Some(canvas) = self.canvas.as_mut() {
                            canvas.resize(width, height);
                        }
                    }
                }
                DrawOp::Clear => {
                    let (display, window) = match (self.display.as_ref(), self.window) {
                        (Some(d), Some(w)) => (d, w),
                        (None, _) => return Err(DrawError::Uninitialized(Slot::Display)),
                        (_, None) => return Err(DrawError::Uninitialized(Slot::Window)),
                    };
                    display.clear_window(window)?;
                    if let Some(canvas) = self.canvas.as_mut() {
                        canvas.clear();
                        dirty = true;
                    }
                }
                DrawOp::SetColor(color) => {
                    let canvas = self
                        .canvas
                        .as_mut()
                        .ok_or(DrawError::Uninitialized(Slot::Canvas))?;
                    let (r, g, b, a) = color.rgba();
                    canvas.set_source_rgba(r, g, b, a);
                    outcome.previous_color = Some(self.color);
                    self.color = color;
                }
                DrawOp::SetAlpha(alpha) => {
                    let canvas = self
                        .canvas
                        .as_mut()
                        .ok_or(DrawError::Uninitialized(Slot::Canvas))?;
                    let (r, g, b, _) = self.color.rgba();
                    canvas.set_source_rgba(r, g, b, alpha as f64 / 255.0);
                    outcome.previous_alpha = Some(self.color.alpha());
                    self.color = self.color.with_alpha(alpha);
                }
                DrawOp::Draw => {
                    let (canvas, surface) = match (self.canvas.as_mut(), self.surface.as_ref()) {
                        (Some(c), Some(s)) => (c, s),
                        (None, _) => return Err(DrawError::Uninitialized(Slot::Canvas)),
                        (_, None) => return Err(DrawError::Uninitialized(Slot::Surface)),
                    };
                    let (x, y) = surface.glyph_origin();
                    canvas.mask_glyph(surface.glyph(), x, y);
                    dirty = true;
                }
                DrawOp::SetKeyboard(choice) => {
                    if let SegmentChoice::Select(segment) = choice {
                        self.segment = segment;
                    }
                    let (canvas, surface) = match (self.canvas.as_mut(), self.surface.as_ref()) {
                        (Some(c), Some(s)) => (c, s),
                        (None, _) => return Err(DrawError::Uninitialized(Slot::Canvas)),
                        (_, None) => return Err(DrawError::Uninitialized(Slot::Surface)),
                    };
                    let arc = RingArc::for_segment(surface, self.segment);
                    canvas.stroke_arc(&arc, RING_LINE_WIDTH);
                    dirty = true;
                }
                DrawOp::Free => {
                    if self.surface.take().is_some() {
                        debug!("surface descriptor released");
                    } else {
                        warn!("free requested with no surface descriptor");
                    }
                }
            }
        }

        self.dirty |= dirty;
        Ok(outcome)
    }

    /// Flush the canvas if anything was painted since the last present.
    /// Returns whether a flush happened.
    pub fn present(&mut self) -> Result<bool, DrawError> {
        if !self.dirty {
            return Ok(false);
        }
        let canvas = self
            .canvas
            .as_mut()
            .ok_or(DrawError::Uninitialized(Slot::Canvas))?;
        canvas.flush()?;
        self.dirty = false;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_is_clear_then_draw() {
        assert_eq!(Request::redraw().ordered(), vec![DrawOp::Clear, DrawOp::Draw]);
    }

    #[test]
    fn test_ordered_follows_priority() {
        let request = Request::new()
            .free()
            .keyboard(SegmentChoice::Last)
            .draw()
            .set_alpha(1)
            .set_color(PackedColor(0))
            .clear()
            .configure(1, 1);
        let ranks: Vec<u8> = request.ordered().iter().map(DrawOp::priority).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_painting_ops_need_every_slot() {
        for op in [
            DrawOp::SetColor(PackedColor(0)),
            DrawOp::SetAlpha(0),
            DrawOp::Draw,
            DrawOp::SetKeyboard(SegmentChoice::Last),
        ] {
            assert_eq!(op.required_slots(), &ALL_SLOTS);
        }
        assert!(DrawOp::Free.required_slots().is_empty());
    }
}
