//! Configuration management for wordplay.
//!
//! Config files are markdown with YAML frontmatter. A global file under the
//! user's home directory is merged with an optional project file; project
//! values win.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TextError;
use crate::palindrome::PalindromeStrategy;

pub mod defaults;
pub mod validation;

pub use defaults::*;
pub use validation::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub palindrome: PalindromeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/wordplay/config.md)
    /// 2. Project config (.wordplay/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(crate::paths::PROJECT_CONFIG),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).map_err(|e| {
            anyhow::Error::from(TextError::Config {
                path: path.to_path_buf(),
                message: format!("{:#}", e),
            })
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        let config: Config =
            serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?;

        config.validate()?;

        Ok(config)
    }

    /// Load and merge the given global and project files. Either may be
    /// missing, in which case its values fall back to defaults.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;
        tracing::debug!(
            format = ?config.output.format,
            strategy = %config.palindrome.strategy,
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Returns the path to the global config file at ~/.config/wordplay/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/wordplay/config.md"))
}

/// Split markdown content into its YAML frontmatter and body.
///
/// Returns `(None, content)` when there is no `---` delimited block.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}

/// Config file contents with every field optional, used for merging.
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub output: Option<PartialOutputConfig>,
    pub palindrome: Option<PartialPalindromeConfig>,
    pub logging: Option<PartialLoggingConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialPalindromeConfig {
    pub strategy: Option<PalindromeStrategy>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialLoggingConfig {
    pub level: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_output = self.output.unwrap_or_default();
        let project_output = project.output.unwrap_or_default();
        let global_palindrome = self.palindrome.unwrap_or_default();
        let project_palindrome = project.palindrome.unwrap_or_default();
        let global_logging = self.logging.unwrap_or_default();
        let project_logging = project.logging.unwrap_or_default();

        let defaults = Config::default();

        Config {
            output: OutputConfig {
                format: project_output
                    .format
                    .or(global_output.format)
                    .unwrap_or(defaults.output.format),
                color: project_output
                    .color
                    .or(global_output.color)
                    .unwrap_or(defaults.output.color),
            },
            palindrome: PalindromeConfig {
                strategy: project_palindrome
                    .strategy
                    .or(global_palindrome.strategy)
                    .unwrap_or(defaults.palindrome.strategy),
            },
            logging: LoggingConfig {
                level: project_logging
                    .level
                    .or(global_logging.level)
                    .unwrap_or(defaults.logging.level),
            },
        }
    }
}
