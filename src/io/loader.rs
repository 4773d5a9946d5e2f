use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};
use tracing::error;

use crate::error::{Error, Result};

/// Decode `path` and normalize it to RGBA8.
///
/// The format is sniffed from the file contents first, so a mislabeled
/// extension still loads.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    decode(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| {
            error!("Failed to load image {:?}: {}", path, source);
            Error::Load {
                path: path.to_path_buf(),
                source,
            }
        })
}

fn decode(path: &Path) -> std::result::Result<image::DynamicImage, ImageError> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}
