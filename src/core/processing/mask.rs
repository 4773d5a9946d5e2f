//! Alpha-channel masks and the contour operations run on them.
//!
//! Masks are single-channel `GrayImage`s holding 0 or 255. Contours are traced
//! with 8-connectivity by `imageproc`; only outermost borders are considered.
use std::collections::VecDeque;

use image::{GrayImage, Luma, RgbaImage};
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::point::Point;
use imageproc::region_labelling::{Connectivity, connected_components};

use crate::types::BoundingBox;

pub fn alpha_channel(image: &RgbaImage) -> GrayImage {
    let (width, height) = image.dimensions();
    GrayImage::from_fn(width, height, |x, y| Luma([image.get_pixel(x, y)[3]]))
}

/// `value > level` becomes 255, everything else 0.
pub fn threshold(gray: &GrayImage, level: u8) -> GrayImage {
    map_binary(gray, |v| v > level)
}

/// `value <= level` becomes 255, everything else 0.
pub fn threshold_inverted(gray: &GrayImage, level: u8) -> GrayImage {
    map_binary(gray, |v| v <= level)
}

fn map_binary(gray: &GrayImage, keep: impl Fn(u8) -> bool) -> GrayImage {
    let (width, height) = gray.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        if keep(gray.get_pixel(x, y)[0]) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Outermost contours of the foreground, in the order the tracer meets them
/// (raster order of their first pixel).
///
/// The mask is traced inside a one-pixel zero frame so regions touching the
/// image edge still get an outer border. Points are returned in the
/// coordinates of `mask`.
pub fn external_contours(mask: &GrayImage) -> Vec<Contour<i32>> {
    let (width, height) = mask.dimensions();
    let mut padded = GrayImage::new(width + 2, height + 2);
    for (x, y, pixel) in mask.enumerate_pixels() {
        padded.put_pixel(x + 1, y + 1, *pixel);
    }

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|mut c| {
            for p in c.points.iter_mut() {
                p.x -= 1;
                p.y -= 1;
            }
            c
        })
        .collect()
}

/// Area enclosed by the boundary polygon (shoelace formula).
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0i64;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        twice_area += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
    }
    twice_area.abs() as f64 / 2.0
}

/// Contour with the largest enclosed area. On ties the earliest one wins.
pub fn largest_contour(contours: &[Contour<i32>]) -> Option<&Contour<i32>> {
    let mut best: Option<(&Contour<i32>, f64)> = None;
    for contour in contours {
        let area = contour_area(&contour.points);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((contour, area)),
        }
    }
    best.map(|(c, _)| c)
}

/// Inclusive axis-aligned bounds of a set of points.
pub fn bounding_rect(points: &[Point<i32>]) -> Option<BoundingBox> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let min_x = min_x.max(0);
    let min_y = min_y.max(0);
    Some(BoundingBox::new(
        min_x as u32,
        min_y as u32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    ))
}

/// Rasterize `contour` filled: its region plus everything it encloses.
///
/// The region is the 8-connected component the contour was traced from.
/// Pixels outside it are those reachable from the image border through
/// 4-connected non-region pixels; every other pixel is inside.
pub fn fill_contour(mask: &GrayImage, contour: &Contour<i32>) -> GrayImage {
    let (width, height) = mask.dimensions();
    let mut filled = GrayImage::new(width, height);

    let Some(seed) = contour.points.first() else {
        return filled;
    };
    if seed.x < 0 || seed.y < 0 || seed.x as u32 >= width || seed.y as u32 >= height {
        return filled;
    }

    let labels = connected_components(mask, Connectivity::Eight, Luma([0u8]));
    let region = labels.get_pixel(seed.x as u32, seed.y as u32)[0];
    if region == 0 {
        return filled;
    }

    let w = width as usize;
    let idx = |x: u32, y: u32| y as usize * w + x as usize;
    let in_region = |x: u32, y: u32| labels.get_pixel(x, y)[0] == region;

    let mut outside = vec![false; w * height as usize];
    let mut queue = VecDeque::new();

    let seed_outside = |x: u32, y: u32, outside: &mut Vec<bool>, queue: &mut VecDeque<(u32, u32)>| {
        if !in_region(x, y) && !outside[idx(x, y)] {
            outside[idx(x, y)] = true;
            queue.push_back((x, y));
        }
    };
    for x in 0..width {
        seed_outside(x, 0, &mut outside, &mut queue);
        seed_outside(x, height - 1, &mut outside, &mut queue);
    }
    for y in 0..height {
        seed_outside(0, y, &mut outside, &mut queue);
        seed_outside(width - 1, y, &mut outside, &mut queue);
    }

    while let Some((x, y)) = queue.pop_front() {
        let neighbours = [
            (x.checked_sub(1), Some(y)),
            (x.checked_add(1).filter(|&nx| nx < width), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), y.checked_add(1).filter(|&ny| ny < height)),
        ];
        for (nx, ny) in neighbours {
            if let (Some(nx), Some(ny)) = (nx, ny) {
                seed_outside(nx, ny, &mut outside, &mut queue);
            }
        }
    }

    for (x, y, pixel) in filled.enumerate_pixels_mut() {
        if !outside[idx(x, y)] {
            *pixel = Luma([255]);
        }
    }
    filled
}
