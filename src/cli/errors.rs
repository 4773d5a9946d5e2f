use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No valid case images found: {path:?}")]
    NoCaseImages { path: PathBuf },

    #[error("No valid template images found: {path:?}")]
    NoTemplateImages { path: PathBuf },

    #[error("Failed to read config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: caseshot::Error,
    },

    #[error(transparent)]
    Caseshot(#[from] caseshot::Error),
}
