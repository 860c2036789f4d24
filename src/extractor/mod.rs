//! Extractor module - Tolerant parsing of Gitleaks rule sets

pub mod gitleaks;
pub mod record;

pub use gitleaks::extract_rules;
pub use record::RuleRecord;
