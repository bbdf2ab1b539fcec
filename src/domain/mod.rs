//! Core domain types and models
//!
//! Defines the run configuration, the file records produced by a scan and the
//! summary returned after a conversion.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::encoding::{TextEncoding, DEFAULT_ENCODINGS};

/// Settings that can come from a config file, the environment or the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exclusion regexes applied after the built-in defaults
    pub exclude_patterns: Vec<String>,

    /// Descend into symlinked directories
    pub follow_symlinks: bool,

    /// Encodings tried in order when reading file content
    pub encodings: Vec<TextEncoding>,

    /// Config file the settings were loaded from; never rendered
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_patterns: Vec::new(),
            follow_symlinks: false,
            encodings: DEFAULT_ENCODINGS.to_vec(),
            config_file: None,
        }
    }
}

/// A file selected by the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Path relative to the scanned root, '/'-separated
    pub relative_path: String,

    /// Syntax label derived from the extension
    pub label: &'static str,
}

/// Outcome of a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Files rendered into the document
    pub files_rendered: usize,

    /// Files decoded with an encoding other than the first in the chain
    pub files_fallback_decoded: usize,

    /// Files whose content was replaced by a placeholder
    pub files_placeholder: usize,

    /// Size of the written document
    pub bytes_written: u64,
}
