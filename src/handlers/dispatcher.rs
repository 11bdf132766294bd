//! Event dispatcher for the overlay.
//!
//! Turns [`CoverEvent`]s into draw requests and owns the fade countdown.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → Dispatcher::dispatch_events() → DrawContext::apply()
//!                                                    → DrawContext::present()
//! ```
//!
//! Each event is presented at most once, however many requests it sends.
//!
//! | Event            | Requests                                   |
//! |------------------|--------------------------------------------|
//! | `CloseRequested` | none, returns [`Action::Close`]            |
//! | `Expose`         | REDRAW                                     |
//! | `Configure`      | CONFIGURE + REDRAW                         |
//! | `KeymapChanged`  | none, returns [`Action::RefreshKeymap`]    |
//! | `KeyPress`       | REDRAW + SET_KEYBOARD(keycode % 7), arm    |
//! | `Tick`           | REDRAW, SET_ALPHA, SET_KEYBOARD(last), SET_COLOR |

use tracing::{debug, trace};

use crate::error::DrawError;
use crate::events::CoverEvent;
use crate::model::{FadeTimer, PackedColor, Segment, SegmentChoice};
use crate::ui::overlay::{Canvas, Display, DrawContext, Request};

/// What the caller must do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    /// Stop the event loop.
    Close,
    /// Re-read the keyboard mapping from the window system.
    RefreshKeymap,
}

/// Maps events to requests and runs the fade countdown.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    fade: FadeTimer,
    base_color: PackedColor,
}

impl Dispatcher {
    pub fn new(base_color: PackedColor) -> Self {
        Self {
            fade: FadeTimer::new(),
            base_color,
        }
    }

    pub fn fade(&self) -> &FadeTimer {
        &self.fade
    }

    pub fn base_color(&self) -> PackedColor {
        self.base_color
    }

    /// First paint after the context is initialised: base colour + REDRAW.
    pub fn start<C: Canvas, D: Display>(&self, ctx: &mut DrawContext<C, D>) -> Result<(), DrawError> {
        ctx.apply(&Request::redraw().set_color(self.base_color))?;
        ctx.present()?;
        Ok(())
    }

    /// Handle a single event.
    pub fn dispatch<C: Canvas, D: Display>(
        &mut self,
        ctx: &mut DrawContext<C, D>,
        event: CoverEvent,
    ) -> Result<Action, DrawError> {
        if event != CoverEvent::Tick {
            trace!(event = event.description(), "dispatch");
        }
        match event {
            CoverEvent::CloseRequested => {
                debug!("close requested");
                return Ok(Action::Close);
            }
            CoverEvent::Expose => {
                ctx.apply(&Request::redraw())?;
            }
            CoverEvent::Configure { width, height } => {
                ctx.apply(&Request::redraw().configure(width, height))?;
            }
            CoverEvent::KeymapChanged => return Ok(Action::RefreshKeymap),
            CoverEvent::KeyPress { keycode } => {
                let segment = Segment::from_keycode(keycode);
                ctx.apply(&Request::redraw().keyboard(SegmentChoice::Select(segment)))?;
            }
            CoverEvent::Tick => self.on_tick(ctx)?,
            CoverEvent::Ignored => {}
        }
        if event.arms_fade() {
            self.fade.arm();
        }
        ctx.present()?;
        Ok(Action::Continue)
    }

    /// Handle a batch in order.
    ///
    /// Stops at the first close request. Otherwise reports
    /// [`Action::RefreshKeymap`] if any event asked for it.
    pub fn dispatch_events<C: Canvas, D: Display, I>(
        &mut self,
        ctx: &mut DrawContext<C, D>,
        events: I,
    ) -> Result<Action, DrawError>
    where
        I: IntoIterator<Item = CoverEvent>,
    {
        let mut result = Action::Continue;
        for event in events {
            match self.dispatch(ctx, event)? {
                Action::Close => return Ok(Action::Close),
                Action::RefreshKeymap => result = Action::RefreshKeymap,
                Action::Continue => {}
            }
        }
        Ok(result)
    }

    fn on_tick<C: Canvas, D: Display>(&mut self, ctx: &mut DrawContext<C, D>) -> Result<(), DrawError> {
        let Some(alpha) = self.fade.tick() else {
            return Ok(());
        };
        ctx.apply(&Request::redraw())?;
        ctx.apply(&Request::new().set_alpha(alpha))?;
        ctx.apply(&Request::new().keyboard(SegmentChoice::Last))?;
        ctx.apply(&Request::new().set_color(self.base_color))?;
        Ok(())
    }
}
