use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::core::processing::resize::resize_rgba;
use crate::error::Result;
use crate::types::{BoundingBox, ResizeMethod};

/// Fit `case` into `bbox` and paste it over a copy of `template`.
///
/// The case's own alpha is the blend mask. The result always has the
/// template's dimensions; the template itself is left untouched.
pub fn composite(
    case: &RgbaImage,
    template: &RgbaImage,
    bbox: BoundingBox,
    method: ResizeMethod,
) -> Result<RgbaImage> {
    let resized = resize_rgba(case, bbox.width, bbox.height, method)?;
    let mut result = template.clone();
    paste_with_alpha(&mut result, &resized, bbox.x, bbox.y);
    debug!("Pasted {}x{} case at {}", bbox.width, bbox.height, bbox);
    Ok(result)
}

/// Blend `overlay` onto `base` at (`left`, `top`), weighted by overlay alpha.
/// Overlay pixels falling outside `base` are clipped.
pub fn paste_with_alpha(base: &mut RgbaImage, overlay: &RgbaImage, left: u32, top: u32) {
    let (base_w, base_h) = base.dimensions();
    for (x, y, src) in overlay.enumerate_pixels() {
        let (bx, by) = (left as u64 + x as u64, top as u64 + y as u64);
        if bx >= base_w as u64 || by >= base_h as u64 {
            continue;
        }
        let dst = base.get_pixel_mut(bx as u32, by as u32);
        *dst = blend(*dst, *src);
    }
}

fn blend(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let a = src[3] as u32;
    match a {
        0 => dst,
        255 => src,
        _ => {
            let mix = |d: u8, s: u8| ((d as u32 * (255 - a) + s as u32 * a + 127) / 255) as u8;
            Rgba([
                mix(dst[0], src[0]),
                mix(dst[1], src[1]),
                mix(dst[2], src[2]),
                mix(dst[3], src[3]),
            ])
        }
    }
}
