use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use brewlog_core::storage::DEFAULT_FILENAME;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BrewlogConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// Rows shown by `list` when `--limit` is not given
    pub default_limit: Option<usize>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DEFAULT_FILENAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<BrewlogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("brewlog"));
        }
    }
    Ok(home_dir()?.join(".config").join("brewlog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("brewlog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("brewlog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: BrewlogConfig =
            toml::from_str("[storage]\npath = \"/tmp/b.json\"\n\n[ui]\ndefault_limit = 5\n")
                .unwrap();
        assert_eq!(config.storage.path.as_deref(), Some("/tmp/b.json"));
        assert_eq!(config.ui.default_limit, Some(5));
    }

    #[test]
    fn test_sections_are_optional() {
        let config: BrewlogConfig = toml::from_str("").unwrap();
        assert!(config.storage.path.is_none());
        assert!(config.ui.default_limit.is_none());
    }

    #[test]
    fn test_read_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage\n").unwrap();

        let err = read_config(&path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config"));
        assert!(err.contains("config.toml"));
    }
}
