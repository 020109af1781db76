//! Helper functions for the Brewlog CLI.
//!
//! This module provides:
//! - Parsing utilities for datetimes and entry references
//! - The form-level checks a brew must pass before it is logged

mod parsing;
mod validation;

// Re-export public API
pub use parsing::{parse_datetime, parse_entry_ref, EntryRef};
pub use validation::validate_brew_form;
