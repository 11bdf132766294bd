//! End-to-end drawing into a tiny-skia pixmap.

mod common;

use common::{RecordingDisplay, WINDOW};
use slock_cover::model::constants::{FADE_COUNTDOWN, SLATE};
use slock_cover::model::{GlyphMask, PackedColor, SurfaceDescriptor};
use slock_cover::ui::overlay::{DrawContext, InitTarget, PixmapCanvas};
use slock_cover::{CoverEvent, Dispatcher};

type PixmapContext = DrawContext<PixmapCanvas, RecordingDisplay>;

// 200x200 window, 20x20 glyph at (90, 90), ring radius 40 around (100, 100)
const GLYPH_PIXEL: (u32, u32) = (100, 100);
// middle of segment 0, at angle PI / 7
const RING_PIXEL: (u32, u32) = (136, 117);

fn pixmap_context() -> PixmapContext {
    let glyph = GlyphMask::new(20, 20, vec![255; 400]).unwrap();
    let mut ctx = PixmapContext::new();
    ctx.init(InitTarget::Canvas(PixmapCanvas::new(200, 200).unwrap()));
    ctx.init(InitTarget::Surface(SurfaceDescriptor::new(200, 200, glyph)));
    ctx.init(InitTarget::Display(RecordingDisplay::default()));
    ctx.init(InitTarget::Window(WINDOW));
    ctx
}

fn alpha_at(ctx: &PixmapContext, (x, y): (u32, u32)) -> u8 {
    ctx.canvas().unwrap().pixmap().pixel(x, y).unwrap().alpha()
}

fn started() -> (Dispatcher, PixmapContext) {
    let dispatcher = Dispatcher::new(PackedColor(SLATE));
    let mut ctx = pixmap_context();
    dispatcher.start(&mut ctx).unwrap();
    (dispatcher, ctx)
}

#[test]
fn first_paint_shows_glyph_only() {
    let (_, ctx) = started();
    assert_eq!(alpha_at(&ctx, GLYPH_PIXEL), 0xA0);
    assert_eq!(alpha_at(&ctx, (89, 89)), 0);
    assert_eq!(alpha_at(&ctx, RING_PIXEL), 0);
}

#[test]
fn key_press_lights_ring_segment() {
    let (mut dispatcher, mut ctx) = started();
    dispatcher
        .dispatch(&mut ctx, CoverEvent::KeyPress { keycode: 14 })
        .unwrap();

    assert!(alpha_at(&ctx, RING_PIXEL) >= 150);
    assert_eq!(alpha_at(&ctx, GLYPH_PIXEL), 0xA0);
    // opposite side of the ring belongs to segment 3
    assert_eq!(alpha_at(&ctx, (64, 83)), 0);
}

#[test]
fn ring_dims_as_fade_runs() {
    let (mut dispatcher, mut ctx) = started();
    dispatcher
        .dispatch(&mut ctx, CoverEvent::KeyPress { keycode: 14 })
        .unwrap();
    let bright = alpha_at(&ctx, RING_PIXEL);

    for _ in 0..50 {
        dispatcher.dispatch(&mut ctx, CoverEvent::Tick).unwrap();
    }
    // last tick drew with 51 * 160 / 100 = 81
    let dim = alpha_at(&ctx, RING_PIXEL);
    assert!(dim < bright);
    assert!((78..=84).contains(&dim), "alpha {dim}");
    // glyph is redrawn at full base alpha each tick
    assert_eq!(alpha_at(&ctx, GLYPH_PIXEL), 0xA0);
}

#[test]
fn ring_is_gone_after_fade_and_expose() {
    let (mut dispatcher, mut ctx) = started();
    dispatcher
        .dispatch(&mut ctx, CoverEvent::KeyPress { keycode: 14 })
        .unwrap();
    for _ in 0..FADE_COUNTDOWN + 5 {
        dispatcher.dispatch(&mut ctx, CoverEvent::Tick).unwrap();
    }
    dispatcher.dispatch(&mut ctx, CoverEvent::Expose).unwrap();

    assert_eq!(alpha_at(&ctx, RING_PIXEL), 0);
    assert_eq!(alpha_at(&ctx, GLYPH_PIXEL), 0xA0);
}

#[test]
fn configure_reallocates_pixmap_and_recentres() {
    let (mut dispatcher, mut ctx) = started();
    dispatcher
        .dispatch(
            &mut ctx,
            CoverEvent::Configure {
                width: 300,
                height: 100,
            },
        )
        .unwrap();

    let canvas = ctx.canvas().unwrap();
    assert_eq!((canvas.width(), canvas.height()), (300, 100));
    // glyph now spans (140..160, 40..60)
    assert_eq!(alpha_at(&ctx, (150, 50)), 0xA0);
    assert_eq!(alpha_at(&ctx, (139, 50)), 0);
}
