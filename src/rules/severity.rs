//! # Severity and Confidence Levels
//!
//! The target engine grades every rule with a severity and a confidence.
//! Both ladders are defined here, serialized in lowercase to match the
//! engine's findings format.
//!
//! ## Examples
//!
//! ```rust
//! use ruleport::rules::Severity;
//!
//! let severity = Severity::Medium;
//! assert_eq!(severity.as_str(), "medium");
//!
//! // Parse from string
//! let parsed = Severity::from_string("HIGH");
//! assert_eq!(parsed, Some(Severity::High));
//! ```

use serde::{Deserialize, Serialize};

/// Severity levels of the target engine's findings ladder.
///
/// Imported rules only ever use **High** (the default for a secret match)
/// and **Medium** (high-entropy patterns that are more prone to false
/// positives), but the full ladder is modeled so emitted tables and reports
/// line up with the engine's own definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Confirmed, immediately exploitable exposure.
    Critical,
    /// Likely secret exposure. Default for imported rules.
    High,
    /// Possible exposure with a higher false-positive rate.
    Medium,
    /// Minor issue.
    Low,
    /// Informational.
    Info,
}

impl Severity {
    /// Lowercase name, as used in reports and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }

    /// Enum variant name, as spelled in emitted Rust source.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Info => "Info",
        }
    }

    #[allow(dead_code)]
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Confidence levels attached to imported rules.
///
/// The import pipeline fixes confidence at **Medium**: the patterns come
/// from a curated upstream set but have not been tuned against the engine's
/// own corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Lowercase name, as used in reports and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Enum variant name, as spelled in emitted Rust source.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_string() {
        assert_eq!(Severity::from_string("critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_string("high"), Some(Severity::High));
        assert_eq!(Severity::from_string("HIGH"), Some(Severity::High));
        assert_eq!(Severity::from_string("medium"), Some(Severity::Medium));
        assert_eq!(Severity::from_string("low"), Some(Severity::Low));
        assert_eq!(Severity::from_string("info"), Some(Severity::Info));

        assert_eq!(Severity::from_string("unknown"), None);
        assert_eq!(Severity::from_string(""), None);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Medium.as_str(), "medium");
        assert_eq!(Severity::Medium.variant_name(), "Medium");
        assert_eq!(Severity::High.variant_name(), "High");
    }

    #[test]
    fn test_confidence_names() {
        assert_eq!(Confidence::Medium.as_str(), "medium");
        assert_eq!(Confidence::Medium.variant_name(), "Medium");

        let json = serde_json::to_string(&Confidence::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
