//! Embedding API for the screen locker.
//!
//! The locker creates one [`LockCover`] with its display connection and
//! feeds it every X event via [`LockCover::handle_event`]. The fade tick is
//! not signal driven: the locker's loop asks [`LockCover::tick_due`] and
//! dispatches [`CoverEvent::Tick`] between window events.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, CreateGCAux, Gcontext, Window};
use x11rb::protocol::Event;
use x11rb::rust_connection::RustConnection;

use super::display::{KeyboardMap, X11Canvas, X11Display};
use super::window::{create_cover_window, CoverWindow};
use crate::error::CoverError;
use crate::events::CoverEvent;
use crate::handlers::{Action, Dispatcher};
use crate::model::{SurfaceDescriptor, TickSchedule};
use crate::storage::CoverConfig;
use crate::ui::overlay::{load_lock_glyph, DrawContext, InitTarget, Request};

/// The lock overlay: its window, draw state and fade schedule.
pub struct LockCover {
    conn: Arc<RustConnection>,
    window: CoverWindow,
    gc: Gcontext,
    context: DrawContext<X11Canvas, X11Display>,
    dispatcher: Dispatcher,
    keyboard: KeyboardMap,
    schedule: TickSchedule,
}

impl LockCover {
    /// Create and map the overlay on `screen_num`, then give it its first
    /// paint.
    ///
    /// Fails with [`CoverError::LockImage`] when the glyph cannot be read.
    pub fn new(
        conn: Arc<RustConnection>,
        screen_num: usize,
        config: &CoverConfig,
    ) -> Result<Self, CoverError> {
        let glyph = load_lock_glyph(&config.lock_image)?;
        debug!(
            path = %config.lock_image.display(),
            width = glyph.width(),
            height = glyph.height(),
            "lock glyph loaded"
        );

        let window = create_cover_window(&conn, screen_num, config.input_passthrough)?;
        let (width, height) = (window.width as u32, window.height as u32);

        conn.map_window(window.window)?;

        let gc = conn.generate_id()?;
        conn.create_gc(gc, window.window, &CreateGCAux::new())?;

        let canvas = X11Canvas::new(conn.clone(), window.window, gc, window.depth, width, height)?;

        let mut context = DrawContext::new();
        context.init(InitTarget::Canvas(canvas));
        context.init(InitTarget::Surface(SurfaceDescriptor::new(width, height, glyph)));
        context.init(InitTarget::Window(window.window));
        context.init(InitTarget::Display(X11Display::new(conn.clone())));

        let dispatcher = Dispatcher::new(config.base_color());
        dispatcher.start(&mut context)?;

        let keyboard = KeyboardMap::fetch(&conn)?;

        conn.flush()?;
        info!(window = window.window, width, height, "lock cover mapped");

        Ok(Self {
            conn,
            window,
            gc,
            context,
            dispatcher,
            keyboard,
            schedule: TickSchedule::new(config.tick_interval(), Instant::now()),
        })
    }

    pub fn window(&self) -> Window {
        self.window.window
    }

    /// True while the ring is fading out.
    pub fn is_fading(&self) -> bool {
        self.dispatcher.fade().is_armed()
    }

    /// True when a fade tick should be dispatched now.
    pub fn tick_due(&self, now: Instant) -> bool {
        self.is_fading() && self.schedule.is_due(now)
    }

    /// How long the host may wait before the next tick.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.schedule.time_until(now)
    }

    /// Map an X event onto an overlay event.
    pub fn translate(&self, event: &Event) -> CoverEvent {
        let own = self.window.window;
        let atoms = &self.window.atoms;
        match event {
            // Other client messages are dropped rather than redrawn.
            Event::ClientMessage(e)
                if e.window == own
                    && e.format == 32
                    && e.type_ == atoms.WM_PROTOCOLS
                    && e.data.as_data32()[0] == atoms.WM_DELETE_WINDOW =>
            {
                CoverEvent::CloseRequested
            }
            // One redraw per expose series; earlier parts of it are dropped.
            Event::Expose(e) if e.window == own && e.count == 0 => CoverEvent::Expose,
            Event::ConfigureNotify(e) if e.window == own => CoverEvent::Configure {
                width: e.width as u32,
                height: e.height as u32,
            },
            Event::MappingNotify(_) | Event::KeymapNotify(_) => CoverEvent::KeymapChanged,
            Event::KeyPress(e) => CoverEvent::KeyPress { keycode: e.detail },
            _ => CoverEvent::Ignored,
        }
    }

    /// Handle one overlay event. Returns true when the window should close.
    pub fn dispatch(&mut self, event: CoverEvent) -> Result<bool, CoverError> {
        self.dispatch_events([event])
    }

    /// Handle a batch of overlay events in order. Returns true when the
    /// window should close; events after the close request are dropped.
    pub fn dispatch_events<I>(&mut self, events: I) -> Result<bool, CoverError>
    where
        I: IntoIterator<Item = CoverEvent>,
    {
        let now = Instant::now();
        let events: Vec<CoverEvent> = events.into_iter().collect();
        for event in &events {
            match *event {
                CoverEvent::Tick => self.schedule.advance(now),
                CoverEvent::KeyPress { keycode } => {
                    trace!(keycode, keysym = ?self.keyboard.keysym(keycode), "key press");
                    self.schedule.restart(now);
                }
                _ => {}
            }
        }

        match self.dispatcher.dispatch_events(&mut self.context, events)? {
            Action::Close => Ok(true),
            Action::RefreshKeymap => {
                self.keyboard.refresh(&self.conn)?;
                Ok(false)
            }
            Action::Continue => Ok(false),
        }
    }

    /// Translate and handle one X event. Returns true when the window should
    /// close.
    pub fn handle_event(&mut self, event: &Event) -> Result<bool, CoverError> {
        let event = self.translate(event);
        self.dispatch(event)
    }
}

impl Drop for LockCover {
    fn drop(&mut self) {
        if let Err(e) = self.context.apply(&Request::new().free()) {
            warn!("failed to release surface: {}", e);
        }
        let _ = self.conn.free_gc(self.gc);
        let _ = self.conn.destroy_window(self.window.window);
        let _ = self.conn.free_colormap(self.window.colormap);
        let _ = self.conn.flush();
        debug!("lock cover destroyed");
    }
}
