//! # Extracted Rule Records
//!
//! This module defines the value type produced by rule-set extraction.
//!
//! A [`RuleRecord`] holds one Gitleaks rule exactly as it appeared in the
//! source document: the raw regex text, the keyword list in source order,
//! and the entropy threshold (0.0 when the rule declares none). Records are
//! built once during extraction and never mutated afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use ruleport::extractor::RuleRecord;
//!
//! let record = RuleRecord {
//!     id: "stripe-access-token".to_string(),
//!     description: "Found a Stripe Access Token".to_string(),
//!     regex: r"(?i)\b(sk|rk)_(test|live|prod)_[0-9a-z]{10,99}\b".to_string(),
//!     keywords: vec!["sk_test".to_string(), "sk_live".to_string()],
//!     entropy: 2.0,
//! };
//!
//! assert_eq!(record.keywords.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// One rule recovered from a Gitleaks rule set.
///
/// Every record returned by extraction has a non-empty `id` and a non-empty
/// `regex`; blocks missing either field never become records. All other
/// fields fall back to defaults when the source omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// The Gitleaks rule identifier (e.g. "aws-access-token").
    pub id: String,

    /// Human-readable description. Empty when the rule declares none.
    pub description: String,

    /// The raw, unescaped detection pattern text.
    pub regex: String,

    /// Keyword pre-filter list, in source order. May be empty.
    pub keywords: Vec<String>,

    /// Shannon-entropy threshold for the matched value. 0.0 when absent.
    pub entropy: f64,
}
