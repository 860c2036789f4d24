//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use super::RulesetRenderer;
use crate::error::RuleportError;
use crate::rules::{ImportedRule, ImportedRuleset, Severity};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct RulesetReport<'a> {
    version: &'static str,
    generated_at: String,
    source: &'a str,
    summary: RulesetSummary,
    skipped_existing: &'a [String],
    rules: &'a [ImportedRule],
}

#[derive(Serialize)]
struct RulesetSummary {
    total: usize,
    high_count: usize,
    medium_count: usize,
    skipped_count: usize,
}

impl RulesetRenderer for JsonOutput {
    fn render_ruleset(&self, ruleset: &ImportedRuleset) -> Result<String, RuleportError> {
        let report = RulesetReport {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now().to_rfc3339(),
            source: &ruleset.source,
            summary: RulesetSummary {
                total: ruleset.len(),
                high_count: ruleset.count_by_severity(Severity::High),
                medium_count: ruleset.count_by_severity(Severity::Medium),
                skipped_count: ruleset.skipped_existing().len(),
            },
            skipped_existing: ruleset.skipped_existing(),
            rules: ruleset.rules(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Confidence;

    fn create_test_ruleset() -> ImportedRuleset {
        let mut ruleset = ImportedRuleset::new("gitleaks.toml");
        ruleset.add_rule(ImportedRule {
            id: "SEC-164".to_string(),
            source_id: "openai-api-key".to_string(),
            severity: Severity::High,
            confidence: Confidence::Medium,
            regex: "sk-[a-z]{20}".to_string(),
            description: "OpenAI API key".to_string(),
            keywords: vec!["sk-".to_string()],
            entropy: 3.2,
            remediation: "Imported from Gitleaks: openai-api-key".to_string(),
        });
        ruleset.mark_skipped("aws-access-token");
        ruleset
    }

    #[test]
    fn test_render_ruleset() {
        let output = JsonOutput::new();
        let ruleset = create_test_ruleset();

        let rendered = output.render_ruleset(&ruleset).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["source"], "gitleaks.toml");
        assert_eq!(json["summary"]["total"], 1);
        assert_eq!(json["summary"]["high_count"], 1);
        assert_eq!(json["summary"]["medium_count"], 0);
        assert_eq!(json["summary"]["skipped_count"], 1);
        assert_eq!(json["skipped_existing"][0], "aws-access-token");
        assert_eq!(json["rules"][0]["id"], "SEC-164");
        assert_eq!(json["rules"][0]["source_id"], "openai-api-key");
        assert_eq!(json["rules"][0]["severity"], "high");
        assert_eq!(json["rules"][0]["confidence"], "medium");
    }

    #[test]
    fn test_render_empty_ruleset() {
        let output = JsonOutput::new();
        let ruleset = ImportedRuleset::new("empty.toml");

        let rendered = output.render_ruleset(&ruleset).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(json["source"], "empty.toml");
        assert_eq!(json["summary"]["total"], 0);
        assert!(json["rules"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_generated_at_is_present() {
        let output = JsonOutput::new();
        let ruleset = create_test_ruleset();

        let rendered = output.render_ruleset(&ruleset).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert!(json["generated_at"].as_str().unwrap().contains('T'));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}
