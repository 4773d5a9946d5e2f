use std::path::{Path, PathBuf};

use caseshot::{
    BatchOptions, CompositeParams, NamePattern, OutputFormat, discover_images, process_batch,
};
use image::{Rgba, RgbaImage};

fn write_png(dir: &Path, name: &str, color: Rgba<u8>) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(24, 24, color).save(&path).unwrap();
    path
}

#[test]
fn every_case_meets_every_template_in_case_major_order() {
    let dir = tempfile::tempdir().unwrap();
    let cases_dir = dir.path().join("cases");
    let templates_dir = dir.path().join("templates");
    std::fs::create_dir_all(&cases_dir).unwrap();
    std::fs::create_dir_all(&templates_dir).unwrap();

    write_png(&cases_dir, "a.png", Rgba([255, 0, 0, 255]));
    write_png(&cases_dir, "b.png", Rgba([0, 255, 0, 255]));
    for name in ["t1.png", "t2.png", "t3.png"] {
        write_png(&templates_dir, name, Rgba([9, 9, 9, 255]));
    }

    let cases = discover_images(&cases_dir).unwrap();
    let templates = discover_images(&templates_dir).unwrap();
    let output_dir = dir.path().join("out").join("nested");

    let report = process_batch(
        &cases,
        &templates,
        &output_dir,
        &NamePattern::default(),
        &CompositeParams::default(),
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.attempted, 6);
    assert_eq!(report.succeeded, 6);
    assert_eq!(report.failed, 0);

    let order: Vec<String> = report
        .outcomes
        .iter()
        .map(|o| o.output.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        order,
        vec![
            "a_t1.png", "a_t2.png", "a_t3.png", "b_t1.png", "b_t2.png", "b_t3.png"
        ]
    );
    for outcome in &report.outcomes {
        assert!(outcome.output.is_file());
    }
}

#[test]
fn failing_pairs_are_counted_without_stopping_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_png(dir.path(), "good.png", Rgba([255, 0, 0, 255]));
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"not an image").unwrap();
    let templates = vec![
        write_png(dir.path(), "t1.png", Rgba([0, 0, 0, 255])),
        write_png(dir.path(), "t2.png", Rgba([0, 0, 0, 255])),
    ];
    let output_dir = dir.path().join("out");

    let params = CompositeParams::builder()
        .format(OutputFormat::Jpeg)
        .build()
        .unwrap();
    let report = process_batch(
        &[broken.clone(), good],
        &templates,
        &output_dir,
        &NamePattern::parse("{input}-{template}").unwrap(),
        &params,
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(report.attempted, 4);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 2);
    assert!(report.succeeded <= report.attempted);

    for outcome in &report.outcomes {
        if outcome.case == broken {
            assert!(!outcome.succeeded());
            assert!(!outcome.output.exists());
        } else {
            assert!(outcome.succeeded());
            assert_eq!(outcome.output.extension().unwrap(), "jpg");
        }
    }

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["attempted"], 4);
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 4);
}

#[test]
fn progress_bar_does_not_change_the_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let case = write_png(dir.path(), "case.png", Rgba([255, 0, 0, 255]));
    let template = write_png(dir.path(), "tpl.png", Rgba([0, 0, 0, 255]));

    let report = process_batch(
        &[case],
        &[template],
        &dir.path().join("out"),
        &NamePattern::default(),
        &CompositeParams::default(),
        BatchOptions { progress: true },
    )
    .unwrap();

    assert_eq!(report.attempted, 1);
    assert_eq!(report.succeeded, 1);
    assert!(dir.path().join("out").join("case_tpl.png").is_file());
}
