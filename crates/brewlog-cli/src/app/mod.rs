//! Application-level utilities for the Brewlog CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the brew document
//! - A context that lazily loads config and opens the entry store

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
