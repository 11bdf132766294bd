//! Platform-specific implementations.
//!
//! The overlay targets X11 only. The `x11` submodule contains:
//! - Window creation (ARGB visual, WM properties, input shape)
//! - Display and canvas implementations for the draw controller
//! - The embedding API used by the screen locker

pub mod x11;

pub use x11::*;
