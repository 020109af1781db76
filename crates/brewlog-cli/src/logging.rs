//! Diagnostic logging setup.
//!
//! Core storage events (recovered loads, failed writes) are emitted through
//! `tracing`; this installs a stderr subscriber filtered by `BREWLOG_LOG`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BREWLOG_LOG";

fn default_directive(quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else {
        "warn"
    }
}

pub fn init(quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));
    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_only_shows_errors() {
        assert_eq!(default_directive(true), "error");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
