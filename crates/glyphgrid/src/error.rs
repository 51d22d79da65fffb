use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphError {
    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("invalid image {}: {source}", .path.display())]
    InvalidImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scan geometry: {0}")]
    Geometry(String),
    #[error("invalid glyph mask: {0}")]
    InvalidMask(String),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
