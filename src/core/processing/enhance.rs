use image::RgbaImage;

/// Scale the color channels by `factor`. Alpha is untouched.
pub fn adjust_brightness(image: &RgbaImage, factor: f32) -> RgbaImage {
    map_color(image, |c| c as f32 * factor)
}

/// Scale the color channels away from (or towards) the mean luminance.
pub fn adjust_contrast(image: &RgbaImage, factor: f32) -> RgbaImage {
    let mean = mean_luminance(image).round();
    map_color(image, |c| mean + (c as f32 - mean) * factor)
}

/// Mean ITU-R 601 luma over every pixel, transparent ones included.
pub fn mean_luminance(image: &RgbaImage) -> f32 {
    let count = image.width() as u64 * image.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = image
        .pixels()
        .map(|p| (p[0] as u64 * 299 + p[1] as u64 * 587 + p[2] as u64 * 114 + 500) / 1000)
        .sum();
    sum as f32 / count as f32
}

fn map_color(image: &RgbaImage, f: impl Fn(u8) -> f32) -> RgbaImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in pixel.0.iter_mut().take(3) {
            *channel = f(*channel).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
