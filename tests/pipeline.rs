use std::path::{Path, PathBuf};

use caseshot::core::processing::mask::{
    alpha_channel, bounding_rect, external_contours, largest_contour, threshold,
    threshold_inverted,
};
use caseshot::{
    BoundingBox, CompositeParams, OutputFormat, ResizeMethod, compose_images, extract_case,
    locate_placeholder, process_pair, process_pair_to_path,
};
use image::{Rgba, RgbaImage};

const CASE_RED: Rgba<u8> = Rgba([200, 30, 40, 255]);
const NOISE_BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const FRAME_GRAY: Rgba<u8> = Rgba([120, 120, 120, 255]);

/// 200x300 case: opaque silhouette with 20 isolated noise pixels in the margin.
fn noisy_case() -> (RgbaImage, Vec<(u32, u32)>) {
    let mut case = RgbaImage::new(200, 300);
    for y in 20..280 {
        for x in 20..180 {
            case.put_pixel(x, y, CASE_RED);
        }
    }
    let mut noise = Vec::new();
    for i in 0..10 {
        noise.push((5 + i * 19, 4));
        noise.push((4, 30 + i * 25));
    }
    for &(x, y) in &noise {
        case.put_pixel(x, y, NOISE_BLUE);
    }
    (case, noise)
}

/// 800x600 template with a fully transparent 300x400 window at (100, 100).
fn windowed_template() -> RgbaImage {
    let window = BoundingBox::new(100, 100, 300, 400);
    RgbaImage::from_fn(800, 600, |x, y| {
        if window.contains(x, y) {
            Rgba([0, 0, 0, 0])
        } else {
            FRAME_GRAY
        }
    })
}

/// 200x300 case whose silhouette reaches every edge. The four 30x30 corners
/// are transparent and each holds one isolated noise pixel.
fn full_frame_case() -> (RgbaImage, Vec<(u32, u32)>) {
    let in_corner = |x: u32, y: u32| (x < 30 || x >= 170) && (y < 30 || y >= 270);
    let mut case = RgbaImage::from_fn(200, 300, |x, y| {
        if in_corner(x, y) {
            Rgba([0, 0, 0, 0])
        } else {
            CASE_RED
        }
    });
    let noise = vec![(10, 10), (189, 12), (8, 290), (190, 288)];
    for &(x, y) in &noise {
        case.put_pixel(x, y, NOISE_BLUE);
    }
    (case, noise)
}

fn plain_params(method: ResizeMethod) -> CompositeParams {
    CompositeParams::builder()
        .brightness(false, 1.0)
        .contrast(false, 1.0)
        .resize_method(method)
        .build()
        .unwrap()
}

fn save(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn noisy_case_lands_in_transparent_window() {
    let (case, noise) = noisy_case();
    let template = windowed_template();
    let params = plain_params(ResizeMethod::Nearest);

    let extracted = extract_case(&case, &params);
    assert_eq!(extracted.dimensions(), (200, 300));
    for &(x, y) in &noise {
        assert_eq!(extracted.get_pixel(x, y)[3], 0);
    }
    assert_eq!(extracted.get_pixel(100, 150), &CASE_RED);

    let bbox = locate_placeholder(&template);
    assert_eq!(bbox, BoundingBox::new(100, 100, 300, 400));

    let out = compose_images(&case, &template, &params).unwrap();
    assert_eq!(out.dimensions(), (800, 600));
    assert!(out.pixels().all(|p| *p != NOISE_BLUE));
    assert_eq!(out.get_pixel(250, 300), &CASE_RED);
    // Margin of the case stays transparent inside the window.
    assert_eq!(out.get_pixel(101, 101), &Rgba([0, 0, 0, 0]));
    for (x, y, p) in out.enumerate_pixels() {
        if !bbox.contains(x, y) {
            assert_eq!(p, &FRAME_GRAY, "pixel ({x}, {y}) outside the window changed");
        }
    }
}

#[test]
fn opaque_template_uses_centered_quadrant() {
    let case = RgbaImage::from_pixel(10, 10, CASE_RED);
    let template = RgbaImage::from_pixel(80, 40, FRAME_GRAY);

    let out = compose_images(&case, &template, &plain_params(ResizeMethod::Nearest)).unwrap();
    assert_eq!(out.dimensions(), (80, 40));
    assert_eq!(out.get_pixel(20, 10), &CASE_RED);
    assert_eq!(out.get_pixel(59, 29), &CASE_RED);
    assert_eq!(out.get_pixel(19, 10), &FRAME_GRAY);
    assert_eq!(out.get_pixel(60, 29), &FRAME_GRAY);
}

#[test]
fn pair_from_disk_round_trips_through_png() {
    let dir = tempfile::tempdir().unwrap();
    let (case, _) = noisy_case();
    let case_path = save(dir.path(), "case.png", &case);
    let template_path = save(dir.path(), "template.png", &windowed_template());
    let output = dir.path().join("out.png");

    process_pair_to_path(
        &case_path,
        &template_path,
        &output,
        &CompositeParams::default(),
    )
    .unwrap();

    let written = image::open(&output).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (800, 600));
    assert_eq!(written.get_pixel(0, 0), &FRAME_GRAY);
}

#[test]
fn jpeg_output_is_a_jpeg_container() {
    let dir = tempfile::tempdir().unwrap();
    let case_path = save(dir.path(), "case.png", &RgbaImage::from_pixel(20, 20, CASE_RED));
    let template_path = save(dir.path(), "tpl.png", &windowed_template());
    let output = dir.path().join("out.jpg");

    let params = CompositeParams::builder()
        .format("JPG".parse::<OutputFormat>().unwrap())
        .quality(80)
        .build()
        .unwrap();
    process_pair_to_path(&case_path, &template_path, &output, &params).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[test]
fn unreadable_case_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = save(dir.path(), "tpl.png", &windowed_template());
    let bogus = dir.path().join("case.png");
    std::fs::write(&bogus, b"\x89PNG but not really").unwrap();

    let err = process_pair(&bogus, &template_path, &CompositeParams::default()).unwrap_err();
    assert!(matches!(err, caseshot::Error::Load { ref path, .. } if path == &bogus));
}

#[test]
fn template_is_not_modified_by_compositing() {
    let template = windowed_template();
    let before = template.clone();
    let case = RgbaImage::from_pixel(30, 30, CASE_RED);
    let params = CompositeParams::default();

    let first = compose_images(&case, &template, &params).unwrap();
    let second = compose_images(&case, &template, &params).unwrap();
    assert_eq!(template, before);
    assert_eq!(first, second);
}

#[test]
fn silhouette_touching_every_edge_is_detected_and_cleaned() {
    let (case, noise) = full_frame_case();

    let mask = threshold(&alpha_channel(&case), 10);
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1 + noise.len());
    let main = largest_contour(&contours).unwrap();
    assert_eq!(
        bounding_rect(&main.points),
        Some(BoundingBox::new(0, 0, 200, 300))
    );

    let params = plain_params(ResizeMethod::Nearest);
    let extracted = extract_case(&case, &params);
    for &(x, y) in &noise {
        assert_eq!(extracted.get_pixel(x, y)[3], 0, "noise at ({x}, {y})");
    }
    assert_eq!(extracted.get_pixel(100, 0), &CASE_RED);
    assert_eq!(extracted.get_pixel(0, 150), &CASE_RED);
    assert_eq!(extracted.get_pixel(199, 299)[3], 0);

    let out = compose_images(&case, &windowed_template(), &params).unwrap();
    assert!(out.pixels().all(|p| *p != NOISE_BLUE));
    assert_eq!(out.get_pixel(250, 300), &CASE_RED);
}

#[test]
fn placeholder_touching_the_template_edge_is_found_exactly() {
    let template = RgbaImage::from_fn(100, 80, |x, _| {
        if x < 50 {
            Rgba([0, 0, 0, 0])
        } else {
            FRAME_GRAY
        }
    });

    let mask = threshold_inverted(&alpha_channel(&template), 100);
    let contours = external_contours(&mask);
    assert_eq!(contours.len(), 1);
    assert_eq!(
        bounding_rect(&contours[0].points),
        Some(BoundingBox::new(0, 0, 50, 80))
    );

    assert_eq!(locate_placeholder(&template), BoundingBox::new(0, 0, 50, 80));

    let case = RgbaImage::from_pixel(10, 10, CASE_RED);
    let out = compose_images(&case, &template, &plain_params(ResizeMethod::Nearest)).unwrap();
    assert_eq!(out.get_pixel(0, 0), &CASE_RED);
    assert_eq!(out.get_pixel(49, 79), &CASE_RED);
    assert_eq!(out.get_pixel(50, 0), &FRAME_GRAY);
}
