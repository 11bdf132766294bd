//! X11 implementation using x11rb and a tiny-skia canvas.
//!
//! - [`window`]: overlay window creation
//! - [`display`]: `Display`/`Canvas` implementations and the keyboard map
//! - [`cover`]: `LockCover`, the embedding API

pub mod atoms;
pub mod cover;
pub mod display;
pub mod window;

pub use cover::LockCover;
pub use display::{KeyboardMap, X11Canvas, X11Display};
pub use window::{create_cover_window, find_argb_visual, CoverWindow};
