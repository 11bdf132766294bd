//! Drawing constants and default values.
//!
//! This module contains the fixed parameters of the lock overlay: ring
//! geometry, fade timing and the default colours.

// === Ring ===

/// Number of equal slices in the keyboard ring.
pub const SEGMENTS: u8 = 7;

/// Stroke width of a ring segment in pixels.
pub const RING_LINE_WIDTH: f64 = 15.0;

/// Distance between the glyph's half-height and the ring radius.
pub const RING_GAP: u32 = 30;

// === Colours ===

/// Base slate colour, packed `0xRRGGBBAA`.
pub const SLATE: u32 = 0x2433_3AA0;

// === Fade ===

/// Fade steps remaining right after a key press.
pub const FADE_COUNTDOWN: u32 = 100;

/// Alpha of the ring on the first fade step (`0xA0` = 160).
pub const FADE_PEAK_ALPHA: u32 = 0xA0;

/// Default fade tick period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 10;

/// Minimum accepted tick period in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Maximum accepted tick period in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// === Window ===

/// Default location of the lock glyph, relative to the working directory.
pub const LOCK_IMAGE_PATH: &str = "./img/lock.png";

/// WM_NAME and WM_CLASS of the overlay window.
pub const WINDOW_NAME: &str = "slock_cover";
