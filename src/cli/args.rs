use clap::Parser;
use std::path::PathBuf;

use caseshot::{DEFAULT_NAME_PATTERN, OutputFormat, ParamOverrides, ResizeMethod};

#[derive(Parser)]
#[command(name = "caseshot", version, about = "Phone-case product image compositor")]
pub struct CliArgs {
    /// Case image, or a directory of case images
    #[arg(short, long)]
    pub input: PathBuf,

    /// Template image, or a directory of templates
    #[arg(short, long)]
    pub template: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output quality, 1-100 [default: 95]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Output format (png, jpg/jpeg or webp) [default: png]
    #[arg(short, long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,

    /// Output name pattern; tokens: {input}, {template}, {timestamp}
    #[arg(short = 'n', long, default_value = DEFAULT_NAME_PATTERN)]
    pub name_pattern: String,

    /// Brightness factor applied to the case [default: 1.1]
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Contrast factor applied to the case [default: 1.1]
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Keep every opaque region of the case instead of only the largest
    #[arg(long, default_value_t = false)]
    pub no_edge_detection: bool,

    /// Resampling filter used to fit the case into the placeholder [default: lanczos]
    #[arg(long, value_enum, ignore_case = true)]
    pub resize_method: Option<ResizeMethod>,

    /// JSON file with parameter overrides; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report of every pair to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Verbose (debug) logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parameters set explicitly on the command line.
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            output_quality: self.quality,
            output_format: self.format,
            brightness_factor: self.brightness,
            contrast_factor: self.contrast,
            detect_edges: self.no_edge_detection.then_some(false),
            resize_method: self.resize_method,
            ..Default::default()
        }
    }
}
