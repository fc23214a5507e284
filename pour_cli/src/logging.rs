//! Logging setup
//!
//! Events go to stderr through `tracing-subscriber` so stdout carries only
//! the report.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config file sets one
pub const DEFAULT_FILTER: &str = "warn";

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive.
///
/// `--verbose` wins, then `RUST_LOG`, then the config file, then
/// [`DEFAULT_FILTER`].
pub fn filter_directive(env: Option<&str>, config_filter: Option<&str>, verbose: bool) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    env.filter(|s| !s.trim().is_empty())
        .or(config_filter)
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Initialize the global subscriber.
///
/// # Environment
/// - `RUST_LOG`: filter directive, e.g. `RUST_LOG=pour_core=debug`
pub fn init(config_filter: Option<&str>, verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::new(filter_directive(env.as_deref(), config_filter, verbose));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(filter_directive(None, None, false), "warn");
        assert_eq!(filter_directive(None, Some("info"), false), "info");
        assert_eq!(filter_directive(Some("trace"), Some("info"), false), "trace");
        assert_eq!(filter_directive(Some("trace"), Some("info"), true), "debug");
    }

    #[test]
    fn test_blank_env_falls_through() {
        assert_eq!(filter_directive(Some("  "), Some("pour=info"), false), "pour=info");
    }
}
