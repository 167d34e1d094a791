//! Command-line error handling
//!
//! Every failure surfaces as a [`CliError`], which knows the process exit
//! code it maps to.

use std::path::PathBuf;
use thiserror::Error;
use weight_predictor_engine::PredictorError;

/// Errors raised by the command-line tool
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported scenario file extension: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Predictor(#[from] PredictorError),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error")]
    Config(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => 66,
            CliError::Parse { .. } | CliError::UnsupportedFormat(_) => 65,
            CliError::Predictor(_) => 2,
            CliError::Report(_) => 74,
            CliError::Config(_) => 78,
        }
    }
}

/// Result type alias for command-line operations
pub type CliResult<T> = Result<T, CliError>;
