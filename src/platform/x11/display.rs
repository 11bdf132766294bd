//! X11 implementations of the draw controller's seams.
//!
//! [`X11Canvas`] draws into a tiny-skia pixmap and pushes it to the window
//! with `PutImage`; [`X11Display`] clears the window. Both share one
//! connection.

use std::sync::Arc;

use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::xproto::{
    ConnectionExt as _, Gcontext, ImageFormat, ImageOrder, Keycode, Keysym, Window,
};
use x11rb::rust_connection::RustConnection;

use crate::error::{CoverError, DrawError};
use crate::model::{GlyphMask, RingArc};
use crate::ui::overlay::{Canvas, Display, PixmapCanvas};

/// Fixed size of a PutImage request header in bytes.
const PUT_IMAGE_HEADER: usize = 24;

fn backend<E: std::fmt::Display>(e: E) -> DrawError {
    DrawError::Backend(e.to_string())
}

/// Display connection handed to the draw controller.
pub struct X11Display {
    conn: Arc<RustConnection>,
}

impl X11Display {
    pub fn new(conn: Arc<RustConnection>) -> Self {
        Self { conn }
    }
}

impl Display for X11Display {
    type Window = Window;

    fn clear_window(&self, window: Window) -> Result<(), DrawError> {
        self.conn
            .clear_area(false, window, 0, 0, 0, 0)
            .map_err(backend)?;
        Ok(())
    }
}

/// Canvas that presents a [`PixmapCanvas`] on an X11 window.
pub struct X11Canvas {
    conn: Arc<RustConnection>,
    window: Window,
    gc: Gcontext,
    depth: u8,
    msb_first: bool,
    inner: PixmapCanvas,
    staging: Vec<u8>,
}

impl X11Canvas {
    pub fn new(
        conn: Arc<RustConnection>,
        window: Window,
        gc: Gcontext,
        depth: u8,
        width: u32,
        height: u32,
    ) -> Result<Self, CoverError> {
        let inner = PixmapCanvas::new(width, height).ok_or(CoverError::Canvas { width, height })?;
        let msb_first = conn.setup().image_byte_order == ImageOrder::MSB_FIRST;
        Ok(Self {
            conn,
            window,
            gc,
            depth,
            msb_first,
            inner,
            staging: Vec::new(),
        })
    }

    pub fn pixmap_canvas(&self) -> &PixmapCanvas {
        &self.inner
    }

    /// Convert premultiplied RGBA into the server's 32-bit pixel layout.
    fn fill_staging(&mut self) {
        let data = self.inner.pixmap().data();
        self.staging.clear();
        self.staging.reserve(data.len());
        for px in data.chunks_exact(4) {
            let (r, g, b, a) = (px[0], px[1], px[2], px[3]);
            if self.msb_first {
                self.staging.extend_from_slice(&[a, r, g, b]);
            } else {
                self.staging.extend_from_slice(&[b, g, r, a]);
            }
        }
    }

    /// Upload the whole canvas in row bands that fit one request each.
    fn present(&mut self) -> Result<(), DrawError> {
        self.fill_staging();

        let width = self.inner.width();
        let stride = width as usize * 4;
        let max_bytes = self.conn.maximum_request_bytes();
        let rows_per_band = (max_bytes.saturating_sub(PUT_IMAGE_HEADER) / stride).max(1);

        for (band, chunk) in self.staging.chunks(rows_per_band * stride).enumerate() {
            let y = band * rows_per_band;
            let rows = chunk.len() / stride;
            self.conn
                .put_image(
                    ImageFormat::Z_PIXMAP,
                    self.window,
                    self.gc,
                    width as u16,
                    rows as u16,
                    0,
                    y as i16,
                    0,
                    self.depth,
                    chunk,
                )
                .map_err(backend)?;
        }
        self.conn.flush().map_err(backend)?;
        Ok(())
    }
}

impl Canvas for X11Canvas {
    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.inner.set_source_rgba(red, green, blue, alpha);
    }

    fn mask_glyph(&mut self, glyph: &GlyphMask, x: i32, y: i32) {
        self.inner.mask_glyph(glyph, x, y);
    }

    fn stroke_arc(&mut self, arc: &RingArc, line_width: f64) {
        self.inner.stroke_arc(arc, line_width);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.inner.resize(width, height);
    }

    fn flush(&mut self) -> Result<(), DrawError> {
        self.present()
    }
}

/// Cached keycode → keysym table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardMap {
    min_keycode: Keycode,
    keysyms_per_keycode: u8,
    keysyms: Vec<Keysym>,
}

impl KeyboardMap {
    pub fn from_parts(min_keycode: Keycode, keysyms_per_keycode: u8, keysyms: Vec<Keysym>) -> Self {
        Self {
            min_keycode,
            keysyms_per_keycode,
            keysyms,
        }
    }

    /// Query the server's current mapping.
    pub fn fetch(conn: &RustConnection) -> Result<Self, CoverError> {
        let setup = conn.setup();
        let (min, max) = (setup.min_keycode, setup.max_keycode);
        let count = max.saturating_sub(min).saturating_add(1);
        let reply = conn.get_keyboard_mapping(min, count)?.reply()?;
        Ok(Self::from_parts(
            min,
            reply.keysyms_per_keycode,
            reply.keysyms,
        ))
    }

    /// Re-read the mapping after a MappingNotify.
    pub fn refresh(&mut self, conn: &RustConnection) -> Result<(), CoverError> {
        *self = Self::fetch(conn)?;
        tracing::debug!(keycodes = self.len(), "keyboard mapping refreshed");
        Ok(())
    }

    /// Number of keycodes in the table.
    pub fn len(&self) -> usize {
        match self.keysyms_per_keycode {
            0 => 0,
            n => self.keysyms.len() / n as usize,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unshifted keysym for `keycode`, if mapped.
    pub fn keysym(&self, keycode: Keycode) -> Option<Keysym> {
        let index = keycode.checked_sub(self.min_keycode)? as usize;
        let per = self.keysyms_per_keycode as usize;
        match self.keysyms.get(index * per) {
            Some(0) | None => None,
            Some(sym) => Some(*sym),
        }
    }
}
