//! Command-line interface for repo-to-md

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod convert;

pub use convert::{generate_markdown, ConvertArgs};

const EXAMPLES: &str = "\
Examples:
  repo-to-md ./my_project -o full_source.md
  repo-to-md ./my_project -o full_source.md -x 'test_.*\\.py'
  repo-to-md ./my_project -o full_source.md -x 'test_.*\\.py|.*\\.pyc|temp/.*'";

/// Convert all source code of a repository into a single Markdown file
#[derive(Parser)]
#[command(name = "repo-to-md")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    convert: ConvertArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    convert::run(cli.convert)
}
