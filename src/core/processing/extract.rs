use image::RgbaImage;
use tracing::debug;

use crate::core::params::CompositeParams;
use crate::core::processing::enhance::{adjust_brightness, adjust_contrast};
use crate::core::processing::mask::{
    alpha_channel, external_contours, fill_contour, largest_contour, threshold,
};

/// Alpha above this level counts as part of the case.
pub const CASE_ALPHA_THRESHOLD: u8 = 10;

/// Isolate the case silhouette and apply the configured enhancement.
pub fn extract_case(image: &RgbaImage, params: &CompositeParams) -> RgbaImage {
    let mut case = if params.detect_edges {
        refine_alpha(image)
    } else {
        image.clone()
    };

    if params.auto_adjust_brightness {
        case = adjust_brightness(&case, params.brightness_factor);
    }
    if params.auto_adjust_contrast {
        case = adjust_contrast(&case, params.contrast_factor);
    }
    case
}

/// Keep only the alpha inside the largest opaque contour; everything outside
/// it becomes fully transparent. Soft edges inside the contour are preserved.
pub fn refine_alpha(image: &RgbaImage) -> RgbaImage {
    let alpha = alpha_channel(image);
    let mask = threshold(&alpha, CASE_ALPHA_THRESHOLD);
    let contours = external_contours(&mask);

    let Some(main) = largest_contour(&contours) else {
        debug!("No opaque contour found, keeping original alpha");
        return image.clone();
    };
    debug!(
        "Case mask: {} external contours, keeping the largest ({} boundary points)",
        contours.len(),
        main.points.len()
    );

    let keep = fill_contour(&mask, main);
    let mut refined = image.clone();
    for (x, y, pixel) in refined.enumerate_pixels_mut() {
        pixel[3] &= keep.get_pixel(x, y)[0];
    }
    refined
}
