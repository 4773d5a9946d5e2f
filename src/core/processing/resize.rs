use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResizeMethod;

/// Resize an RGBA image to exactly `target_width` x `target_height`.
///
/// Resampling is alpha-aware: colors are premultiplied before filtering so
/// transparent pixels do not bleed into the silhouette edge.
pub fn resize_rgba(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    method: ResizeMethod,
) -> Result<RgbaImage> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::Processing(format!(
            "Cannot resize to empty size {}x{}",
            target_width, target_height
        )));
    }
    let (width, height) = image.dimensions();
    if (width, height) == (target_width, target_height) {
        return Ok(image.clone());
    }
    if width == 0 || height == 0 {
        return Err(Error::Processing(format!(
            "Cannot resize empty image {}x{}",
            width, height
        )));
    }

    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        width, height, target_width, target_height, method
    );

    let resize_options = ResizeOptions::new().resize_alg(method.resize_alg());
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x4)
        .map_err(|e| Error::Processing(e.to_string()))?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Processing(e.to_string()))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing("Resized buffer does not match target dimensions".to_string())
    })
}
