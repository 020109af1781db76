//! UI primitives for the Brewlog CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, receipts, hints, key-value lines
//! - **Format**: String utilities (truncate, datetimes)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, hint, kv, print_error, receipt, simple_table, Column};

pub use format::{format_datetime, single_line, truncate};
