//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::domain::{Config, ConversionSummary};
use crate::error::ConvertError;
use crate::render::MarkdownDocument;
use crate::scan::{split_patterns, ExclusionRules, FileScanner};
use crate::utils::{format_with_commas, read_file_safe, repo_name, LoadOutcome};

#[derive(Args)]
pub struct ConvertArgs {
    /// Repository directory to convert
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output file (.md)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Regex pattern for files to ignore (repeatable; '|' separates patterns)
    #[arg(short = 'x', long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to config file (repo-to-md.toml or .repo-to-md.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    if !args.directory.is_dir() {
        return Err(ConvertError::InvalidRoot(args.directory).into());
    }

    if !args.output.to_string_lossy().ends_with(".md") {
        eprintln!("Warning: Output file does not have a .md extension");
    }

    let file_config = load_config(&args.directory, args.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides {
            exclude_patterns: split_patterns(&args.exclude),
            follow_symlinks: if args.follow_symlinks { Some(true) } else { None },
        },
    );

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConvertError::CreateOutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    generate_markdown(&args.directory, &args.output, &config).context("conversion failed")?;
    println!("Conversion completed successfully!");
    Ok(())
}

/// Scan `root`, render every eligible file and write the document to `output`.
///
/// Returns `None` without writing anything when no eligible file exists.
pub fn generate_markdown(
    root: &Path,
    output: &Path,
    config: &Config,
) -> Result<Option<ConversionSummary>, ConvertError> {
    println!("Scanning directory: {}", root.display());
    let rules = ExclusionRules::new(&config.exclude_patterns)?;
    let mut scanner = FileScanner::new(root, &rules).follow_symlinks(config.follow_symlinks);
    if let Some(config_file) = &config.config_file {
        scanner = scanner.skip_file(config_file);
    }
    let records = scanner.scan()?;

    if records.is_empty() {
        println!("No code files found!");
        return Ok(None);
    }
    println!("Found {} code files", records.len());

    let preferred = config.encodings.first().copied();
    let mut summary = ConversionSummary::default();
    let mut doc = MarkdownDocument::new();
    doc.push_header(&repo_name(root), records.len());
    doc.push_index(&records);

    for (i, record) in records.iter().enumerate() {
        println!("Processing ({}/{}): {}", i + 1, records.len(), record.relative_path);
        let loaded = read_file_safe(&record.path, &config.encodings);
        match loaded.outcome {
            LoadOutcome::Decoded(encoding) if Some(encoding) != preferred => {
                summary.files_fallback_decoded += 1;
            }
            LoadOutcome::Decoded(_) => {}
            LoadOutcome::Undecodable | LoadOutcome::Unreadable(_) => {
                summary.files_placeholder += 1;
            }
        }
        doc.push_file(record, &loaded.content);
        summary.files_rendered += 1;
    }

    let text = doc.into_string();
    fs::write(output, &text)
        .map_err(|source| ConvertError::WriteOutput { path: output.to_path_buf(), source })?;
    summary.bytes_written = text.len() as u64;

    println!("Markdown file generated: {}", output.display());
    println!("File size: {} bytes", format_with_commas(summary.bytes_written));
    if summary.files_placeholder > 0 {
        eprintln!(
            "Warning: {} file(s) could not be read and were replaced by a placeholder",
            summary.files_placeholder
        );
    }
    tracing::debug!(?summary, "conversion finished");

    Ok(Some(summary))
}
