//! Configuration sections and their default values.

use serde::{Deserialize, Serialize};

use crate::palindrome::PalindromeStrategy;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_true, bool, true);
default_fn!(default_log_level, String, "warn".to_string());

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One plain result per line
    #[default]
    Text,
    /// JSON objects with command, input and output
    Json,
}

/// Output settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Color verdicts when stdout is a terminal (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_true(),
        }
    }
}

/// Palindrome checker settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PalindromeConfig {
    #[serde(default)]
    pub strategy: PalindromeStrategy,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive for the subscriber (default: warn)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
