//! Conversion of extracted rules into engine records

use tracing::{debug, info};

use crate::config::Config;
use crate::extractor::RuleRecord;

use super::existing::is_existing;
use super::imported::{ImportedRule, ImportedRuleset};
use super::severity::{Confidence, Severity};

/// Turns extracted rule records into numbered, graded engine rules.
///
/// Exclusions come from the built-in coverage list (unless disabled in the
/// configuration) plus any extra ids the configuration names. Excluded
/// records do not consume sequence numbers, so re-running against a newer
/// upstream rule set keeps already-assigned ids stable as long as the
/// surviving rules keep their relative order.
pub struct Converter {
    config: Config,
    limit: Option<usize>,
}

impl Converter {
    /// Create a new converter with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            limit: None,
        }
    }

    /// Convert at most `limit` rules
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = Some(limit);
    }

    /// Check if a Gitleaks id is excluded from conversion
    fn is_excluded(&self, id: &str) -> bool {
        if self.config.exclude.builtin && is_existing(id) {
            return true;
        }

        self.config.exclude.ids.iter().any(|excluded| excluded == id)
    }

    fn severity_for(&self, entropy: f64) -> Severity {
        if entropy > self.config.severity.entropy_cutoff {
            Severity::Medium
        } else {
            Severity::High
        }
    }

    /// Run the conversion over extracted records, in document order
    pub fn convert(&self, records: Vec<RuleRecord>, source: impl Into<String>) -> ImportedRuleset {
        info!("Converting {} extracted rules", records.len());

        let mut ruleset = ImportedRuleset::new(source);
        let mut number = self.config.start_number;

        for record in records {
            if let Some(limit) = self.limit {
                if ruleset.len() >= limit {
                    debug!(limit, "conversion limit reached");
                    break;
                }
            }

            if self.is_excluded(&record.id) {
                debug!(id = %record.id, "excluded from conversion");
                ruleset.mark_skipped(record.id);
                continue;
            }

            let id = format!("{}-{:03}", self.config.prefix, number);
            number += 1;

            ruleset.add_rule(ImportedRule {
                id,
                severity: self.severity_for(record.entropy),
                confidence: Confidence::Medium,
                regex: record.regex,
                description: record.description,
                keywords: record.keywords,
                entropy: record.entropy,
                remediation: format!("Imported from Gitleaks: {}", record.id),
                source_id: record.id,
            });
        }

        info!(
            "Conversion complete: {} imported ({} high, {} medium), {} skipped",
            ruleset.len(),
            ruleset.count_by_severity(Severity::High),
            ruleset.count_by_severity(Severity::Medium),
            ruleset.skipped_existing().len(),
        );

        ruleset
    }
}
