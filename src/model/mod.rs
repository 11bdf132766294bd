//! Overlay domain model.
//!
//! This module contains pure drawing state (no window-system dependencies):
//! the packed colour word, surface descriptor, ring geometry, the fade
//! countdown and the fixed constants.
//!
//! X11 specifics live in `platform::x11`.

pub mod color;
pub mod constants;
pub mod fade;
pub mod ring;
pub mod surface;

pub use color::PackedColor;
pub use constants::*;
pub use fade::{FadeTimer, TickSchedule};
pub use ring::{RingArc, Segment, SegmentChoice};
pub use surface::{GlyphMask, SurfaceDescriptor};
