//! Ruleport Library
//!
//! This crate provides the core functionality for importing Gitleaks
//! detection rules into an internal secret scanning rule set.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod rules;
pub mod source;

pub use error::RuleportError;

/// Exit codes for the CLI
pub mod exit_codes {
    /// Success - rules imported or checked cleanly
    pub const SUCCESS: i32 = 0;
    /// One or more extracted patterns failed to compile
    pub const INVALID_RULES: i32 = 1;
    /// Warnings found but not blocking
    pub const WARNINGS: i32 = 2;
    /// Configuration or runtime error
    pub const ERROR: i32 = 3;
    /// Invalid command line arguments
    pub const INVALID_ARGS: i32 = 4;
}
