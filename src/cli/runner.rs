use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use caseshot::io::writers::report::write_json_report;
use caseshot::{
    BatchOptions, CompositeParams, NamePattern, ParamOverrides, discover_images, process_batch,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_params(args: &CliArgs) -> Result<CompositeParams, AppError> {
    let mut builder = CompositeParams::builder();
    if let Some(path) = &args.config {
        let from_file =
            ParamOverrides::from_json_file(path).map_err(|source| AppError::Config {
                path: path.clone(),
                source,
            })?;
        builder = builder.apply(&from_file);
    }
    Ok(builder.apply(&args.overrides()).build()?)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);

    let params = build_params(&args)?;
    let pattern = NamePattern::parse(&args.name_pattern).map_err(AppError::from)?;
    debug!("Effective parameters: {:?}", params);

    let cases = discover_images(&args.input).map_err(AppError::from)?;
    if cases.is_empty() {
        error!("No valid case images found: {:?}", args.input);
        return Err(AppError::NoCaseImages { path: args.input }.into());
    }

    let templates = discover_images(&args.template).map_err(AppError::from)?;
    if templates.is_empty() {
        error!("No valid template images found: {:?}", args.template);
        return Err(AppError::NoTemplateImages {
            path: args.template,
        }
        .into());
    }

    info!(
        "Starting: {} case images x {} templates",
        cases.len(),
        templates.len()
    );
    info!("Output directory: {:?}", args.output);

    let report = process_batch(
        &cases,
        &templates,
        &args.output,
        &pattern,
        &params,
        BatchOptions {
            progress: !args.no_progress,
        },
    )
    .map_err(AppError::from)?;

    let output_dir = std::path::absolute(&args.output).unwrap_or_else(|_| args.output.clone());
    info!("Generated images saved in: {:?}", output_dir);

    if let Some(report_path) = &args.report {
        write_json_report(report_path, &report).map_err(AppError::from)?;
    }

    Ok(())
}
