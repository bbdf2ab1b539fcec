//! Repo-to-MD: Convert a source tree into a single Markdown document
//!
//! This library scans a directory, filters files by extension and exclusion
//! regexes, and renders their contents as an indexed Markdown document.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod scan;
pub mod utils;
