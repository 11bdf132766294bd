//! Keyboard ring geometry.
//!
//! The ring around the glyph is split into [`SEGMENTS`] equal arcs; a key
//! press lights the arc picked by its keycode.

use std::f64::consts::PI;

use super::constants::{RING_GAP, SEGMENTS};
use super::surface::SurfaceDescriptor;

/// One of the ring's slices, `0..SEGMENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment(u8);

impl Segment {
    pub fn new(index: u8) -> Option<Self> {
        (index < SEGMENTS).then_some(Self(index))
    }

    /// Bucket a keycode into a segment (`keycode % SEGMENTS`).
    pub fn from_keycode(keycode: u8) -> Self {
        Self(keycode % SEGMENTS)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn start_angle(self) -> f64 {
        self.0 as f64 * 2.0 * PI / SEGMENTS as f64
    }

    pub fn end_angle(self) -> f64 {
        (self.0 as f64 + 1.0) * 2.0 * PI / SEGMENTS as f64
    }
}

/// Which segment a SET_KEYBOARD request draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentChoice {
    /// Draw this segment and remember it.
    Select(Segment),
    /// Draw the most recently selected segment again.
    Last,
}

/// A circular arc, angles in radians increasing clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingArc {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl RingArc {
    /// Arc of `segment` on a ring centred in the window.
    ///
    /// Centre and radius use integer halves of the window and glyph sizes.
    pub fn for_segment(surface: &SurfaceDescriptor, segment: Segment) -> Self {
        Self {
            center_x: (surface.width / 2) as f64,
            center_y: (surface.height / 2) as f64,
            radius: (surface.lock_height() / 2 + RING_GAP) as f64,
            start_angle: segment.start_angle(),
            end_angle: segment.end_angle(),
        }
    }

    /// Point on the arc at `angle`.
    pub fn point_at(&self, angle: f64) -> (f64, f64) {
        (
            self.center_x + self.radius * angle.cos(),
            self.center_y + self.radius * angle.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::surface::GlyphMask;

    #[test]
    fn test_segment_bounds() {
        assert!(Segment::new(6).is_some());
        assert!(Segment::new(7).is_none());
    }

    #[test]
    fn test_from_keycode_wraps() {
        assert_eq!(Segment::from_keycode(14).index(), 0);
        assert_eq!(Segment::from_keycode(38).index(), 3);
    }

    #[test]
    fn test_segments_tile_the_circle() {
        let first = Segment::new(0).unwrap();
        let last = Segment::new(SEGMENTS - 1).unwrap();
        assert_eq!(first.start_angle(), 0.0);
        assert!((last.end_angle() - 2.0 * PI).abs() < 1e-12);
        for i in 0..SEGMENTS - 1 {
            let a = Segment::new(i).unwrap();
            let b = Segment::new(i + 1).unwrap();
            assert!((a.end_angle() - b.start_angle()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_arc_geometry_uses_integer_halves() {
        let glyph = GlyphMask::new(3, 61, vec![0; 183]).unwrap();
        let surface = SurfaceDescriptor::new(1921, 1081, glyph);
        let arc = RingArc::for_segment(&surface, Segment::new(2).unwrap());
        assert_eq!(arc.center_x, 960.0);
        assert_eq!(arc.center_y, 540.0);
        assert_eq!(arc.radius, 60.0);
    }
}
