//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

/// Severity assignment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityConfig {
    /// Entropy threshold above which an imported rule is graded medium
    /// instead of high. High-entropy patterns match broader token shapes
    /// and produce more false positives.
    #[serde(default = "default_entropy_cutoff")]
    pub entropy_cutoff: f64,
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            entropy_cutoff: 4.5,
        }
    }
}

fn default_entropy_cutoff() -> f64 {
    4.5
}

/// Exclusion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludeConfig {
    /// Additional Gitleaks ids to exclude from conversion
    #[serde(default)]
    pub ids: Vec<String>,

    /// Whether to apply the built-in coverage list
    #[serde(default = "default_true")]
    pub builtin: bool,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            ids: Vec::new(),
            builtin: true,
        }
    }
}

fn default_true() -> bool {
    true
}
