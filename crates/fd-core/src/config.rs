//! Configuration types and parsing for funcdep.yml

use crate::attr_set::DEFAULT_SEPARATOR;
use crate::error::{CoreError, CoreResult};
use crate::keys::{KeyStrategy, SearchBudget};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analysis configuration from funcdep.yml
///
/// Every value here is passed explicitly to the parser, renderer and key
/// search; nothing is stored in process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator between attribute names in relation text. An empty
    /// separator means every character is its own attribute.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Candidate key strategy
    #[serde(default)]
    pub strategy: KeyStrategy,

    /// Limits for the exhaustive key search
    #[serde(default)]
    pub search: SearchBudget,

    /// Default output format for reports
    #[serde(default)]
    pub output: OutputFormat,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            strategy: KeyStrategy::default(),
            search: SearchBudget::default(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory.
    /// Looks for funcdep.yml or funcdep.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("funcdep.yml");
        let yaml_path = dir.join("funcdep.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.separator.chars().any(char::is_whitespace) {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "separator {:?} must not contain whitespace; attribute names are trimmed",
                    self.separator
                ),
            });
        }

        if self.search.max_closures == Some(0) {
            return Err(CoreError::ConfigInvalid {
                message: "search.max_closures must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
