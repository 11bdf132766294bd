//! Packed colour word.
//!
//! The word is laid out as `0xRRGGBBAA`. The low byte is the alpha used for
//! rendering; SET_ALPHA rewrites only that byte.

/// A colour packed into a single `u32` as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const fn new(word: u32) -> Self {
        Self(word)
    }

    pub const fn word(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte of the word.
    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// Same colour with the low byte replaced; bits 8-31 are kept as is.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | alpha as u32)
    }

    /// Normalised channels `(r, g, b, a)` in `[0.0, 1.0]`.
    pub fn rgba(self) -> (f64, f64, f64, f64) {
        (
            self.red() as f64 / 255.0,
            self.green() as f64 / 255.0,
            self.blue() as f64 / 255.0,
            self.alpha() as f64 / 255.0,
        )
    }
}

impl From<u32> for PackedColor {
    fn from(word: u32) -> Self {
        Self(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::SLATE;

    #[test]
    fn test_slate_channels() {
        let c = PackedColor(SLATE);
        assert_eq!(c.red(), 0x24);
        assert_eq!(c.green(), 0x33);
        assert_eq!(c.blue(), 0x3A);
        assert_eq!(c.alpha(), 0xA0);
    }

    #[test]
    fn test_with_alpha_keeps_high_bytes() {
        let c = PackedColor(0x1122_3344).with_alpha(0xFE);
        assert_eq!(c.word(), 0x1122_33FE);
    }

    #[test]
    fn test_rgba_normalised() {
        let (r, g, b, a) = PackedColor(0xFF00_80FF).rgba();
        assert_eq!(r, 1.0);
        assert_eq!(g, 0.0);
        assert!((b - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(a, 1.0);
    }
}
