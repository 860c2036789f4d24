//! # Imported Rule Structures
//!
//! This module defines the data structures for rules after conversion, when
//! they carry engine identifiers, severity grades and provenance and are
//! ready to be rendered.
//!
//! ## Overview
//!
//! - [`ImportedRule`] - A single converted rule with its assigned engine id
//! - [`ImportedRuleset`] - Ordered collection of converted rules from one run
//!
//! ## Examples
//!
//! ```rust
//! use ruleport::rules::{Confidence, ImportedRule, ImportedRuleset, Severity};
//!
//! let mut ruleset = ImportedRuleset::new("gitleaks.toml");
//!
//! ruleset.add_rule(ImportedRule {
//!     id: "SEC-164".to_string(),
//!     source_id: "openai-api-key".to_string(),
//!     severity: Severity::High,
//!     confidence: Confidence::Medium,
//!     regex: r"sk-[a-zA-Z0-9]{20}T3BlbkFJ[a-zA-Z0-9]{20}".to_string(),
//!     description: "OpenAI API key".to_string(),
//!     keywords: vec!["sk-".to_string()],
//!     entropy: 3.2,
//!     remediation: "Imported from Gitleaks: openai-api-key".to_string(),
//! });
//!
//! assert_eq!(ruleset.len(), 1);
//! assert_eq!(ruleset.id_range(), Some(("SEC-164", "SEC-164")));
//! ```

use serde::{Deserialize, Serialize};

use super::severity::{Confidence, Severity};

/// A rule after conversion, ready for emission into the engine's table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedRule {
    /// Assigned engine identifier (e.g. "SEC-164").
    pub id: String,

    /// The Gitleaks id this rule was imported from.
    pub source_id: String,

    /// Severity grade, derived from the rule's entropy threshold.
    pub severity: Severity,

    /// Confidence grade. Always medium for imported rules.
    pub confidence: Confidence,

    /// The detection pattern, byte-for-byte as extracted.
    pub regex: String,

    /// Human-readable description from the upstream rule. May be empty.
    pub description: String,

    /// Pre-filter keywords from the upstream rule, in upstream order.
    pub keywords: Vec<String>,

    /// Entropy threshold from the upstream rule, 0.0 when it had none.
    pub entropy: f64,

    /// Provenance note emitted as the rule's remediation text.
    pub remediation: String,
}

/// Ordered collection of converted rules from a single conversion run.
///
/// Keeps the rules in assignment order (which is also upstream document
/// order) together with the ids that were skipped because the engine
/// already covers them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedRuleset {
    /// Where the rule set came from (path or URL).
    pub source: String,

    /// Converted rules, in assignment order.
    rules: Vec<ImportedRule>,

    /// Gitleaks ids excluded because a hand-written rule already covers them.
    skipped_existing: Vec<String>,
}

impl ImportedRuleset {
    /// Create an empty ruleset for the given source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            rules: Vec::new(),
            skipped_existing: Vec::new(),
        }
    }

    /// Add a converted rule
    pub fn add_rule(&mut self, rule: ImportedRule) {
        self.rules.push(rule);
    }

    /// Record a Gitleaks id that was excluded from conversion
    pub fn mark_skipped(&mut self, id: impl Into<String>) {
        self.skipped_existing.push(id.into());
    }

    /// Get all converted rules
    pub fn rules(&self) -> &[ImportedRule] {
        &self.rules
    }

    /// Get the excluded Gitleaks ids
    pub fn skipped_existing(&self) -> &[String] {
        &self.skipped_existing
    }

    /// Count rules by severity
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.rules
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// First and last assigned ids, for summaries
    pub fn id_range(&self) -> Option<(&str, &str)> {
        match (self.rules.first(), self.rules.last()) {
            (Some(first), Some(last)) => Some((first.id.as_str(), last.id.as_str())),
            _ => None,
        }
    }

    /// Get total number of converted rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if no rules were converted
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
