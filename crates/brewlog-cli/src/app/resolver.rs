use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_path, read_config, BrewlogConfig};

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("BREWLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when there is none.
pub fn load_config() -> anyhow::Result<BrewlogConfig> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file; using defaults");
        return Ok(BrewlogConfig::default());
    }
    read_config(&config_path)
}

/// Resolve the brew document path.
///
/// Order: `--data` / `BREWLOG_PATH`, then `storage.path` from config, then
/// the XDG data directory.
pub fn resolve_data_path(cli: &Cli, config: &BrewlogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.data.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.storage.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_data_path()
}
