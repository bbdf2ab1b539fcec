//! CLI argument merging with config

use crate::domain::Config;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub exclude_patterns: Vec<String>,
    pub follow_symlinks: Option<bool>,
}

/// Apply CLI overrides on top of a loaded config.
///
/// Exclude patterns are appended rather than replaced: exclusion only ever
/// grows.
pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    base_config.exclude_patterns.extend(cli.exclude_patterns);

    if let Some(follow_symlinks) = cli.follow_symlinks {
        base_config.follow_symlinks = follow_symlinks;
    }

    base_config
}
