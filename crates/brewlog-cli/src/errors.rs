//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so every command reports
//! failures the same way.

use std::fmt;

use brewlog_core::BrewLogError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The brew document could not be written
    WriteFailed { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::WriteFailed { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn write_failed(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::WriteFailed {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::WriteFailed { .. } => exit_codes::WRITE_FAILED,
        }
    }
}

/// Pick the exit code for an error returned by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<BrewLogError>() {
        Some(BrewLogError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(
            BrewLogError::InvalidInput(_)
            | BrewLogError::Validation(_)
            | BrewLogError::IndexOutOfRange { .. },
        ) => exit_codes::INVALID_INPUT,
        Some(BrewLogError::Storage(_)) => exit_codes::WRITE_FAILED,
        _ => exit_codes::GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_codes() {
        let err: anyhow::Error = CliError::not_found("Entry 9 not found", "Hint: x").into();
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err: anyhow::Error = CliError::write_failed("disk", "Hint: y").into();
        assert_eq!(exit_code_for(&err), exit_codes::WRITE_FAILED);
    }

    #[test]
    fn test_core_error_codes() {
        let err: anyhow::Error = BrewLogError::IndexOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);

        let err: anyhow::Error = BrewLogError::NotFound("Entry \"ab\"".to_string()).into();
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), exit_codes::GENERAL);
    }

    #[test]
    fn test_display_includes_hint() {
        let err = CliError::not_found("Entry 9 not found", "Hint: run list");
        assert_eq!(err.to_string(), "Entry 9 not found\nHint: run list");
    }
}
