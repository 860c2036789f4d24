//! Configuration loader

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, RuleportError};

use super::{ExcludeConfig, SeverityConfig};

const CONFIG_FILENAME: &str = ".ruleport.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for assigned engine ids (e.g. "SEC" gives "SEC-164")
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// First number to assign
    #[serde(default = "default_start_number")]
    pub start_number: u32,

    /// Severity assignment configuration
    #[serde(default)]
    pub severity: SeverityConfig,

    /// Exclusion configuration
    #[serde(default)]
    pub exclude: ExcludeConfig,
}

fn default_prefix() -> String {
    "SEC".to_string()
}

fn default_start_number() -> u32 {
    164
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "SEC".to_string(),
            start_number: 164,
            severity: SeverityConfig::default(),
            exclude: ExcludeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from `.ruleport.toml` in the working directory,
    /// or return the defaults when the file does not exist
    pub fn load_or_default() -> Result<Self, RuleportError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, RuleportError> {
        let content = fs::read_to_string(path).map_err(|e| {
            RuleportError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            RuleportError::Config(ConfigError::Parse {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, RuleportError> {
        toml::to_string_pretty(self).map_err(|e| {
            RuleportError::Config(ConfigError::Serialize {
                message: e.to_string(),
            })
        })
    }

    /// Check that the configuration can drive a conversion
    pub fn validate(&self) -> Result<(), RuleportError> {
        if self.prefix.is_empty() {
            return Err(RuleportError::Config(ConfigError::Invalid {
                message: "prefix must not be empty".to_string(),
            }));
        }

        if self.start_number == 0 {
            return Err(RuleportError::Config(ConfigError::Invalid {
                message: "start_number must be at least 1".to_string(),
            }));
        }

        Ok(())
    }
}
