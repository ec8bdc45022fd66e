use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a sky generation run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Failed to create output file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode image '{path}': {source}")]
    Encoding {
        path: PathBuf,
        source: png::EncodingError,
    },

    #[error("Logger initialization failed: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}
