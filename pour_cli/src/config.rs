//! CLI configuration
//!
//! Settings come from three layers, highest first: command-line flags (or
//! their `POUR_*` environment variables), an optional JSON config file, and
//! built-in defaults. Every file field is optional.
//!
//! ```json
//! {
//!   "format": "json",
//!   "log_filter": "pour=debug",
//!   "currency_symbol": "$"
//! }
//! ```

use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cli::{GlobalOpts, OutputFormat};

/// Resolved CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format
    pub format: OutputFormat,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: Option<String>,

    /// Prefix for money amounts in text reports
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::Text,
            log_filter: None,
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid config file {}", path.display()))
    }

    /// Merge the config file named by the global options (if any) with the
    /// flags themselves.
    pub fn resolve(global: &GlobalOpts) -> Result<Self> {
        let mut config = match &global.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(format) = global.format {
            config.format = format;
        }
        Ok(config)
    }
}
