//! Overlay surface descriptor (pure Rust, no window-system types).
//!
//! Holds the lock glyph and the current window size. Created once when the
//! overlay window is set up and only mutated on resize.

/// Alpha coverage of the lock glyph, row-major, one byte per pixel.
///
/// Only the alpha channel of the source image is kept: the glyph is used as a
/// mask for the current source colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl GlyphMask {
    /// Build a mask from raw coverage bytes. Returns `None` when the buffer
    /// length does not match `width * height`.
    pub fn new(width: u32, height: u32, coverage: Vec<u8>) -> Option<Self> {
        if coverage.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            coverage,
        })
    }

    /// Build a mask from straight RGBA8 pixels, keeping only alpha.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Self> {
        let coverage = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::new(width, height, coverage)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn coverage(&self) -> &[u8] {
        &self.coverage
    }

    /// Coverage at `(x, y)`; zero outside the glyph.
    pub fn at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[(y * self.width + x) as usize]
    }
}

/// Glyph natural size, current window size and the glyph itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDescriptor {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    glyph: GlyphMask,
}

impl SurfaceDescriptor {
    pub fn new(width: u32, height: u32, glyph: GlyphMask) -> Self {
        Self {
            width,
            height,
            glyph,
        }
    }

    pub fn glyph(&self) -> &GlyphMask {
        &self.glyph
    }

    /// Glyph natural width.
    pub fn lock_width(&self) -> u32 {
        self.glyph.width
    }

    /// Glyph natural height.
    pub fn lock_height(&self) -> u32 {
        self.glyph.height
    }

    /// Top-left corner that centres the glyph in the window.
    ///
    /// Computed signed, so a window smaller than the glyph yields a negative
    /// offset.
    pub fn glyph_origin(&self) -> (i32, i32) {
        let x = (self.width as i64 - self.lock_width() as i64) / 2;
        let y = (self.height as i64 - self.lock_height() as i64) / 2;
        (x as i32, y as i32)
    }

    /// Apply a resize. Returns true when the stored size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}
