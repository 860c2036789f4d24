//! Output formatting module for CLI

pub mod json;
mod rust;
mod terminal;

pub use json::JsonOutput;
pub use rust::RustOutput;
pub use terminal::TerminalOutput;

use crate::error::RuleportError;
use crate::extractor::RuleRecord;
use crate::rules::ImportedRuleset;

/// Trait for rendering a converted ruleset
pub trait RulesetRenderer {
    fn render_ruleset(&self, ruleset: &ImportedRuleset) -> Result<String, RuleportError>;
}

/// Trait for rendering extraction-level records
pub trait RecordRenderer {
    fn render_records(&self, records: &[RuleRecord]) -> Result<String, RuleportError>;
}
