//! Configuration loading
//!
//! Layers, lowest to highest precedence: built-in defaults, a config file
//! (explicit or discovered in the scanned root), then `REPO_TO_MD_*`
//! environment variables. CLI flags are applied afterwards by
//! [`merge_cli_with_config`].

mod merge;

pub use merge::{merge_cli_with_config, CliOverrides};

use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};

use crate::domain::Config;
use crate::error::{ConvertError, Result};

/// Environment variable prefix for configuration keys
pub const ENV_PREFIX: &str = "REPO_TO_MD_";

/// File names looked up in the scanned root when no config file is given
pub const CONFIG_FILE_NAMES: &[&str] =
    &["repo-to-md.toml", ".repo-to-md.toml", ".repo-to-md.yml", ".repo-to-md.yaml"];

/// First config file found in `root`, if any.
pub fn discover_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| root.join(name)).find(|path| path.is_file())
}

/// Load configuration for a run rooted at `root`.
///
/// An explicit `config_path` must exist.
pub fn load_config(root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    let file = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(root),
    };
    if let Some(path) = &file {
        if !path.is_file() {
            return Err(ConvertError::MissingConfig(path.clone()));
        }
        tracing::debug!(path = %path.display(), "loading config file");
        figment = merge_file(figment, path);
    }

    let mut config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
    config.config_file = file;
    Ok(config)
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    if is_yaml {
        figment.merge(Yaml::file(path))
    } else {
        figment.merge(Toml::file(path))
    }
}
