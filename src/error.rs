//! Error types for ruleport
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for ruleport
#[derive(Error, Debug)]
pub enum RuleportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule-set source errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Output rendering and writing errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Anything wrapped from command internals
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Errors that occur while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the offending file
        path: String,
        /// The underlying TOML error
        source: toml::de::Error,
    },

    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {message}")]
    Serialize {
        /// Description of the serialization failure
        message: String,
    },

    /// The configuration contains invalid values
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the invalid setting
        message: String,
    },
}

/// Errors that occur while loading a rule set
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to read a local rule-set file
    #[error("Failed to read rule set '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to fetch a remote rule set
    #[error("Failed to fetch rule set from '{url}': {source}")]
    Fetch {
        /// The URL that was requested
        url: String,
        /// The underlying HTTP error
        source: reqwest::Error,
    },

    /// The remote server answered with a non-success status
    #[error("Fetching '{url}' returned HTTP {status}")]
    Status {
        /// The URL that was requested
        url: String,
        /// The HTTP status code
        status: u16,
    },
}

/// Errors that occur while rendering or writing output
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to write the rendered output
    #[error("Failed to write output '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize the rule set
    #[error("Failed to serialize rule set: {source}")]
    Serialize {
        /// The underlying JSON error
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for RuleportError {
    fn from(err: serde_json::Error) -> Self {
        RuleportError::Output(OutputError::Serialize { source: err })
    }
}
