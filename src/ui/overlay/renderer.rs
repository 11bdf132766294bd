//! tiny-skia overlay rendering.
//!
//! Software rasterisation into a premultiplied RGBA pixmap the size of the
//! window. The platform layer copies the pixels to the screen on flush.

use std::f64::consts::FRAC_PI_2;

use tiny_skia::{
    Color, LineCap, Paint, Path, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8, Stroke,
    Transform,
};

use super::canvas::Canvas;
use crate::error::DrawError;
use crate::model::{GlyphMask, RingArc};

/// Off-screen canvas backed by a [`Pixmap`].
pub struct PixmapCanvas {
    pixmap: Pixmap,
    source: Color,
}

impl PixmapCanvas {
    /// Returns `None` for a zero-sized canvas.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            pixmap: Pixmap::new(width, height)?,
            source: Color::TRANSPARENT,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn source(&self) -> Color {
        self.source
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.source);
        paint.anti_alias = true;
        paint
    }

    /// Glyph-sized pixmap of the source colour, modulated by the glyph alpha.
    fn tinted_glyph(&self, glyph: &GlyphMask) -> Option<Pixmap> {
        let mut tinted = Pixmap::new(glyph.width(), glyph.height())?;
        let (r, g, b, a) = (
            self.source.red(),
            self.source.green(),
            self.source.blue(),
            self.source.alpha(),
        );
        for (px, &coverage) in tinted.pixels_mut().iter_mut().zip(glyph.coverage()) {
            if coverage == 0 {
                continue;
            }
            let alpha = a * coverage as f32 / 255.0;
            let channel = |c: f32| (c * alpha * 255.0).round() as u8;
            *px = PremultipliedColorU8::from_rgba(
                channel(r),
                channel(g),
                channel(b),
                (alpha * 255.0).round() as u8,
            )
            .unwrap_or(PremultipliedColorU8::TRANSPARENT);
        }
        Some(tinted)
    }
}

/// Build a path following `arc` with cubic Béziers, at most a quarter turn
/// per curve.
pub fn arc_path(arc: &RingArc) -> Option<Path> {
    let sweep = arc.end_angle - arc.start_angle;
    if sweep <= 0.0 || arc.radius <= 0.0 {
        return None;
    }
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / pieces as f64;
    // Control-point distance for a circular arc of `step` radians
    let k = 4.0 / 3.0 * (step / 4.0).tan() * arc.radius;

    let mut pb = PathBuilder::new();
    let (x0, y0) = arc.point_at(arc.start_angle);
    pb.move_to(x0 as f32, y0 as f32);

    for i in 0..pieces {
        let a0 = arc.start_angle + step * i as f64;
        let a1 = a0 + step;
        let (sx, sy) = arc.point_at(a0);
        let (ex, ey) = arc.point_at(a1);
        let c1 = (sx - k * a0.sin(), sy + k * a0.cos());
        let c2 = (ex + k * a1.sin(), ey - k * a1.cos());
        pb.cubic_to(
            c1.0 as f32,
            c1.1 as f32,
            c2.0 as f32,
            c2.1 as f32,
            ex as f32,
            ey as f32,
        );
    }
    pb.finish()
}

impl Canvas for PixmapCanvas {
    fn set_source_rgba(&mut self, red: f64, green: f64, blue: f64, alpha: f64) {
        self.source = Color::from_rgba(red as f32, green as f32, blue as f32, alpha as f32)
            .unwrap_or(Color::TRANSPARENT);
    }

    fn mask_glyph(&mut self, glyph: &GlyphMask, x: i32, y: i32) {
        if let Some(tinted) = self.tinted_glyph(glyph) {
            self.pixmap.draw_pixmap(
                x,
                y,
                tinted.as_ref(),
                &PixmapPaint::default(),
                Transform::identity(),
                None,
            );
        }
    }

    fn stroke_arc(&mut self, arc: &RingArc, line_width: f64) {
        let Some(path) = arc_path(arc) else {
            return;
        };
        let stroke = Stroke {
            width: line_width as f32,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let paint = self.paint();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn resize(&mut self, width: u32, height: u32) {
        match Pixmap::new(width, height) {
            Some(pixmap) => self.pixmap = pixmap,
            None => tracing::warn!(width, height, "ignoring resize to an empty canvas"),
        }
    }

    fn flush(&mut self) -> Result<(), DrawError> {
        Ok(())
    }
}
