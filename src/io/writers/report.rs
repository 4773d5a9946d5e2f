use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};

/// Write a pretty-printed JSON summary next to the outputs.
pub fn write_json_report<T: Serialize>(output_path: &Path, report: &T) -> Result<()> {
    let json_string = serde_json::to_string_pretty(report)
        .map_err(|e| Error::encode(output_path, e))?;
    std::fs::write(output_path, json_string).map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!("Wrote batch report: {:?}", output_path);
    Ok(())
}
