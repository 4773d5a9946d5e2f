//! Encoders for composited images and the JSON batch report.
pub mod jpeg;
pub mod raster;
pub mod report;

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::Result;
use crate::types::OutputFormat;

/// Encode `image` to `output` in `format`. `quality` only affects JPEG.
pub fn save_image(
    image: &RgbaImage,
    output: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    debug!(
        "Encoding {}x{} {} to {:?}",
        image.width(),
        image.height(),
        format,
        output
    );
    match format {
        OutputFormat::Png => raster::write_png(output, image),
        OutputFormat::Jpeg => jpeg::write_rgba_jpeg(output, image, quality),
        OutputFormat::Webp => raster::write_webp(output, image),
    }
}
