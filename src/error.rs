// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input file {path} is empty")]
    EmptyInput { path: PathBuf },

    #[error("Header has {found} columns but the column mapping needs at least {required}")]
    MissingColumn { required: usize, found: usize },

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Batch worker failed: {0}")]
    Worker(String),
}

impl PipelineError {
    pub fn file_operation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }
}
