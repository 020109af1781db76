//! Application context for the Brewlog CLI.
//!
//! Bundles CLI arguments with lazily-loaded configuration so handlers
//! don't thread both around.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use brewlog_core::{EntryStore, FileDocument};

use crate::cli::Cli;
use crate::config::BrewlogConfig;
use crate::ui::UiContext;

use super::resolver::{load_config, resolve_data_path};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<BrewlogConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&BrewlogConfig> {
        self.config.get_or_try_init(load_config)
    }

    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        resolve_data_path(self.cli, self.config()?)
    }

    /// Open the entry store over the resolved document.
    ///
    /// Never fails on a missing or corrupt document; the store starts empty.
    pub fn open_store(&self) -> anyhow::Result<EntryStore<FileDocument>> {
        let path = self.data_path()?;
        tracing::debug!(path = %path.display(), "opening brew document");
        Ok(EntryStore::open(FileDocument::new(path)))
    }

    pub fn default_limit(&self) -> anyhow::Result<Option<usize>> {
        Ok(self.config()?.ui.default_limit)
    }

    /// Build a UI context for rendering output.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color)
    }
}
