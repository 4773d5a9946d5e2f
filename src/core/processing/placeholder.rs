use image::RgbaImage;
use tracing::debug;

use crate::core::processing::mask::{
    alpha_channel, bounding_rect, external_contours, largest_contour, threshold_inverted,
};
use crate::types::BoundingBox;

/// Alpha at or below this level marks the placeholder area of a template.
pub const PLACEHOLDER_ALPHA_THRESHOLD: u8 = 100;

/// Bounding box of the largest low-opacity region of `template`, or the
/// centered quadrant when the template has none.
pub fn locate_placeholder(template: &RgbaImage) -> BoundingBox {
    let alpha = alpha_channel(template);
    let mask = threshold_inverted(&alpha, PLACEHOLDER_ALPHA_THRESHOLD);
    let contours = external_contours(&mask);

    if let Some(bbox) = largest_contour(&contours).and_then(|c| bounding_rect(&c.points)) {
        debug!(
            "Placeholder found at {} among {} candidate regions",
            bbox,
            contours.len()
        );
        return bbox;
    }

    let (width, height) = template.dimensions();
    let bbox = BoundingBox::centered_quadrant(width, height);
    debug!("No placeholder region found, using centered box {}", bbox);
    bbox
}
