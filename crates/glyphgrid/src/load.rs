use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::error::{GlyphError, Result};

/// Decode the image at `path` into RGBA8.
///
/// A path that does not exist fails with [`GlyphError::PathNotFound`] before
/// any decoding is attempted; anything the decoder rejects is
/// [`GlyphError::InvalidImage`].
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(GlyphError::PathNotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|source| GlyphError::InvalidImage {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = img.to_rgba8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

/// Decode an in-memory encoded image (PNG, BMP) into RGBA8.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|source| GlyphError::InvalidImage {
        path: "<memory>".into(),
        source,
    })?;
    Ok(img.to_rgba8())
}
