//! Lock glyph loading.

use std::path::Path;

use crate::error::CoverError;
use crate::model::GlyphMask;

/// Decode the lock image at `path` into an alpha mask.
///
/// Any read or decode failure is reported as [`CoverError::LockImage`]; the
/// overlay cannot start without its glyph.
pub fn load_lock_glyph(path: &Path) -> Result<GlyphMask, CoverError> {
    let image = image::open(path)
        .map_err(|source| CoverError::LockImage {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (width, height) = image.dimensions();
    GlyphMask::from_rgba(width, height, image.as_raw())
        .ok_or_else(|| CoverError::LockImageSize(path.to_path_buf()))
}
