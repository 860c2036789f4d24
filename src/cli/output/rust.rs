//! Rust source emission
//!
//! Renders a converted ruleset as entries for the engine's static rule
//! table. The default output is a paste-ready fragment; module mode wraps
//! the entries in a complete generated source file.

use chrono::Utc;

use super::RulesetRenderer;
use crate::error::RuleportError;
use crate::rules::{ImportedRule, ImportedRuleset, Severity};

pub struct RustOutput {
    module: bool,
}

impl RustOutput {
    pub fn new(module: bool) -> Self {
        Self { module }
    }

    fn format_entry(&self, rule: &ImportedRule) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "    // {} (from Gitleaks: {})\n",
            rule.id, rule.source_id
        ));
        output.push_str("    SecretRule {\n");
        output.push_str(&format!("        id: \"{}\",\n", rule.id));
        output.push_str(&format!(
            "        severity: Severity::{},\n",
            rule.severity.variant_name()
        ));
        output.push_str(&format!(
            "        confidence: Confidence::{},\n",
            rule.confidence.variant_name()
        ));
        output.push_str(&format!(
            "        pattern: {},\n",
            raw_string_literal(&rule.regex)
        ));
        output.push_str(&format!(
            "        description: \"{}\",\n",
            escape_text(&rule.description)
        ));
        output.push_str(&format!(
            "        keywords: {},\n",
            keywords_literal(&rule.keywords)
        ));
        output.push_str(&format!(
            "        remediation: \"{}\",\n",
            escape_text(&rule.remediation)
        ));
        output.push_str("        references: &[],\n");
        output.push_str("    },\n");

        output
    }

    fn format_module_header(&self, ruleset: &ImportedRuleset) -> String {
        let mut output = String::new();

        output.push_str("//! Auto-generated secret detection rules imported from Gitleaks.\n");
        output.push_str(&format!("//! Source: {}\n", ruleset.source));
        output.push_str("//!\n");
        output.push_str(&format!(
            "//! Generated: {}\n",
            Utc::now().format("%Y-%m-%d")
        ));
        output.push_str(&format!(
            "//! Rules: {} ({} high, {} medium)\n",
            ruleset.len(),
            ruleset.count_by_severity(Severity::High),
            ruleset.count_by_severity(Severity::Medium)
        ));
        output.push_str("//!\n");
        output.push_str("//! Regenerate with `ruleport convert --module` instead of editing by hand.\n");
        output.push('\n');
        output.push_str("use crate::rules::{Confidence, SecretRule, Severity};\n");
        output.push('\n');

        output
    }
}

impl RulesetRenderer for RustOutput {
    fn render_ruleset(&self, ruleset: &ImportedRuleset) -> Result<String, RuleportError> {
        let mut output = String::new();

        if self.module {
            output.push_str(&self.format_module_header(ruleset));
            output.push_str("/// Rules imported from the Gitleaks default config that have no\n");
            output.push_str("/// hand-written counterpart in the built-in table.\n");
            output.push_str("pub static GITLEAKS_RULES: &[SecretRule] = &[\n");
        }

        for rule in ruleset.rules() {
            output.push_str(&self.format_entry(rule));
        }

        if self.module {
            output.push_str("];\n");
        }

        Ok(output)
    }
}

/// Wrap a pattern in a raw string literal, using the smallest number of
/// `#` marks that keeps the literal well-formed.
fn raw_string_literal(pattern: &str) -> String {
    let mut hashes = 0;
    while pattern.contains(&format!("\"{}", "#".repeat(hashes))) {
        hashes += 1;
    }

    let marks = "#".repeat(hashes);
    format!("r{marks}\"{pattern}\"{marks}")
}

/// Escape text for use inside a plain double-quoted literal. Newlines
/// flatten to spaces so descriptions stay on one line.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "")
        .replace('\n', " ")
}

fn keywords_literal(keywords: &[String]) -> String {
    if keywords.is_empty() {
        return "&[]".to_string();
    }

    let quoted: Vec<String> = keywords
        .iter()
        .map(|k| format!("\"{}\"", escape_text(k)))
        .collect();
    format!("&[{}]", quoted.join(", "))
}
