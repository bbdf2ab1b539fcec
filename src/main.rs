//! repo-to-md: Convert a repository's source code into one Markdown file
//!
//! Walks a directory, keeps files with known source extensions that are not
//! excluded, and writes them as labelled code blocks behind a linked index.

use std::process::ExitCode;

use repo_to_md::cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
