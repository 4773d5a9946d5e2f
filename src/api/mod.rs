//! High-level, ergonomic API for composing case images into templates.
//!
//! `process_pair` runs the whole pipeline in memory, `process_pair_to_path`
//! also encodes the result, and `process_batch` walks every case/template
//! combination, writing one file per pair and returning a [`BatchReport`].
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbaImage;
use kdam::{BarExt, tqdm};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::CompositeParams;
use crate::core::processing::composite::composite;
use crate::core::processing::extract::extract_case;
use crate::core::processing::placeholder::locate_placeholder;
use crate::error::{Error, Result};
use crate::io::loader::load_rgba;
use crate::io::naming::{NamePattern, output_path};
use crate::io::writers::save_image;

/// Load, extract, locate and composite one pair without touching the disk
/// beyond reading the two inputs.
pub fn process_pair(
    case_path: &Path,
    template_path: &Path,
    params: &CompositeParams,
) -> Result<RgbaImage> {
    let case_image = load_rgba(case_path)?;
    let template_image = load_rgba(template_path)?;
    compose_images(&case_image, &template_image, params)
}

/// Pipeline over already decoded images.
pub fn compose_images(
    case_image: &RgbaImage,
    template_image: &RgbaImage,
    params: &CompositeParams,
) -> Result<RgbaImage> {
    let case = extract_case(case_image, params);
    let bbox = locate_placeholder(template_image);
    debug!(
        "Case {}x{} -> placeholder {} in {}x{} template",
        case.width(),
        case.height(),
        bbox,
        template_image.width(),
        template_image.height()
    );
    composite(&case, template_image, bbox, params.resize_method)
}

/// Process one pair and encode the composite to `output`.
pub fn process_pair_to_path(
    case_path: &Path,
    template_path: &Path,
    output: &Path,
    params: &CompositeParams,
) -> Result<()> {
    let result = process_pair(case_path, template_path, params)?;
    save_image(&result, output, params.output_format, params.output_quality)?;
    info!("Generated product image: {:?}", output);
    Ok(())
}

/// Outcome of a single case/template pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairOutcome {
    pub case: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
    pub error: Option<String>,
}

impl PairOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Batch processing report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed_secs: f64,
    pub outcomes: Vec<PairOutcome>,
}

impl BatchReport {
    fn record(&mut self, outcome: PairOutcome) {
        self.attempted += 1;
        if outcome.succeeded() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Draw a progress bar on stderr
    pub progress: bool,
}

/// Compose every case with every template (case-major order) into `output_dir`.
///
/// Per-pair failures are logged and counted; only failing to create the
/// output directory aborts the batch.
pub fn process_batch(
    cases: &[PathBuf],
    templates: &[PathBuf],
    output_dir: &Path,
    pattern: &NamePattern,
    params: &CompositeParams,
    options: BatchOptions,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    let total = cases.len() * templates.len();
    info!(
        "Processing {} case images with {} templates ({} pairs)",
        cases.len(),
        templates.len(),
        total
    );

    let started = Instant::now();
    let mut report = BatchReport::default();
    let mut pb = tqdm!(
        total = total,
        desc = "Compositing".to_string(),
        disable = !options.progress
    );

    for case_path in cases {
        for template_path in templates {
            let output = output_path(
                output_dir,
                case_path,
                template_path,
                pattern,
                params.output_format,
            );

            let error = match process_pair_to_path(case_path, template_path, &output, params) {
                Ok(()) => None,
                Err(e) => {
                    warn!(
                        "Error processing {:?} with template {:?}: {}",
                        case_path, template_path, e
                    );
                    Some(e.to_string())
                }
            };

            report.record(PairOutcome {
                case: case_path.clone(),
                template: template_path.clone(),
                output,
                error,
            });
            if let Err(e) = pb.update(1) {
                debug!("Progress bar update failed: {}", e);
            }
        }
    }
    if options.progress {
        eprintln!();
    }

    report.elapsed_secs = started.elapsed().as_secs_f64();

    info!("Batch processing complete!");
    info!("Succeeded: {}/{}", report.succeeded, report.attempted);
    info!("Failed: {}", report.failed);
    info!("Elapsed: {:.2} s", report.elapsed_secs);

    Ok(report)
}
