//! Error types for conversion runs

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a conversion run.
///
/// Per-file read failures are not represented here: they are turned into
/// placeholder content by the loader and never stop the run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Directory '{}' not found!", .0.display())]
    InvalidRoot(PathBuf),

    #[error("invalid exclude pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to scan '{}'", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot create output directory '{}'", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file '{}' not found", .0.display())]
    MissingConfig(PathBuf),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConvertError {
    fn from(e: figment::Error) -> Self {
        ConvertError::Config(Box::new(e))
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
