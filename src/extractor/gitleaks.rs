//! Gitleaks rule-set extraction
//!
//! Gitleaks configs are TOML in theory, but the default rule set is authored
//! inconsistently enough (triple-quoted regexes, optional fields, allowlist
//! subtables) that a strict parse drops rules a tolerant one recovers. This
//! module therefore does not parse TOML: it splits the document on the
//! `[[rules]]` marker and runs independent, fallback-ordered field matchers
//! over each block, skipping whatever it cannot recover.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::record::RuleRecord;

/// The marker that opens every rule definition in a Gitleaks config.
const RULE_DELIMITER: &str = "[[rules]]";

lazy_static! {
    static ref ID_RE: Regex = Regex::new(r#"id\s*=\s*"([^"]+)""#).unwrap();
    static ref DESCRIPTION_RE: Regex = Regex::new(r#"description\s*=\s*"([^"]+)""#).unwrap();
    static ref REGEX_TRIPLE_SINGLE_RE: Regex = Regex::new(r"regex\s*=\s*'''(.+?)'''").unwrap();
    static ref REGEX_TRIPLE_DOUBLE_RE: Regex = Regex::new(r#"regex\s*=\s*"""(.+?)""""#).unwrap();
    static ref REGEX_PLAIN_RE: Regex = Regex::new(r#"regex\s*=\s*"([^"]+)""#).unwrap();
    static ref KEYWORDS_RE: Regex = Regex::new(r"keywords\s*=\s*\[([^\]]+)\]").unwrap();
    static ref QUOTED_STRING_RE: Regex = Regex::new(r#""([^"]+)""#).unwrap();
    static ref ENTROPY_RE: Regex = Regex::new(r"entropy\s*=\s*([0-9.]+)").unwrap();
}

/// Extract every recoverable rule from a Gitleaks rule set.
///
/// The text before the first `[[rules]]` marker is discarded. Each block is
/// then matched field by field; a block yields a record only when both the
/// `id` and the `regex` field could be located. Incomplete blocks are
/// skipped (logged at debug level) and extraction continues, so this
/// function never fails and the worst outcome is an empty list.
///
/// Records come back in block order. Segmentation is textual: a rule whose
/// value contains the literal `[[rules]]` sequence splits at that point.
pub fn extract_rules(content: &str) -> Vec<RuleRecord> {
    let mut rules = Vec::new();

    for (index, block) in content.split(RULE_DELIMITER).skip(1).enumerate() {
        if block.trim().is_empty() {
            continue;
        }

        let id = match capture(&ID_RE, block) {
            Some(id) => id,
            None => {
                debug!(block = index, "skipping block without id");
                continue;
            }
        };

        let regex = match extract_pattern(block) {
            Some(regex) => regex,
            None => {
                debug!(block = index, id = %id, "skipping block without regex");
                continue;
            }
        };

        rules.push(RuleRecord {
            id,
            description: capture(&DESCRIPTION_RE, block).unwrap_or_default(),
            regex,
            keywords: extract_keywords(block),
            entropy: extract_entropy(block),
        });
    }

    rules
}

fn capture(re: &Regex, block: &str) -> Option<String> {
    re.captures(block).map(|c| c[1].to_string())
}

/// Locate the detection pattern, trying the quoting styles from most to
/// least specific. Triple-quoted forms may contain literal double quotes,
/// so they must be checked before the plain double-quoted form or the
/// capture would stop at the first embedded quote.
fn extract_pattern(block: &str) -> Option<String> {
    REGEX_TRIPLE_SINGLE_RE
        .captures(block)
        .or_else(|| REGEX_TRIPLE_DOUBLE_RE.captures(block))
        .or_else(|| REGEX_PLAIN_RE.captures(block))
        .map(|c| c[1].to_string())
}

fn extract_keywords(block: &str) -> Vec<String> {
    match KEYWORDS_RE.captures(block) {
        Some(list) => QUOTED_STRING_RE
            .captures_iter(&list[1])
            .map(|c| c[1].to_string())
            .collect(),
        None => Vec::new(),
    }
}

fn extract_entropy(block: &str) -> f64 {
    ENTROPY_RE
        .captures(block)
        .and_then(|c| c[1].parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_complete_rule() {
        let content = r#"
[[rules]]
id = "generic-api-key"
description = "Detected a Generic API Key"
regex = "key-[0-9a-z]{32}"
keywords = ["key-"]
entropy = 3.5
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "generic-api-key");
        assert_eq!(rules[0].description, "Detected a Generic API Key");
        assert_eq!(rules[0].regex, "key-[0-9a-z]{32}");
        assert_eq!(rules[0].keywords, vec!["key-"]);
        assert_eq!(rules[0].entropy, 3.5);
    }

    #[test]
    fn test_extracts_triple_single_quoted_regex() {
        let content = r#"
[[rules]]
id = "aws-access-token"
regex = '''(?:A3T[A-Z0-9]|AKIA|ASIA|ABIA|ACCA)[A-Z0-9]{16}'''
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].regex, "(?:A3T[A-Z0-9]|AKIA|ASIA|ABIA|ACCA)[A-Z0-9]{16}");
    }

    #[test]
    fn test_extracts_triple_double_quoted_regex() {
        let content = r#"
[[rules]]
id = "github-pat"
regex = """ghp_[0-9a-zA-Z]{36}"""
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].regex, "ghp_[0-9a-zA-Z]{36}");
    }

    #[test]
    fn test_triple_single_preserves_embedded_double_quote() {
        let content = r#"
[[rules]]
id = "gcp-service-account"
regex = '''"type": "service_account"'''
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].regex, r#""type": "service_account""#);
    }

    #[test]
    fn test_triple_quoted_takes_priority_over_plain() {
        // Fallback order is by quoting style, not by position in the block.
        let content = r#"
[[rules]]
id = "mixed-quoting"
regex = "plain-form"
regex = '''triple-form'''
"#;

        let rules = extract_rules(content);
        assert_eq!(rules[0].regex, "triple-form");
    }

    #[test]
    fn test_first_regex_occurrence_wins() {
        let content = r#"
[[rules]]
id = "duplicated-regex"
regex = "first[0-9]+"
regex = "second[0-9]+"
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].regex, "first[0-9]+");
    }

    #[test]
    fn test_capture_is_non_greedy() {
        let content = r#"
[[rules]]
id = "two-on-one-line"
regex = '''abc''' # legacy value: '''xyz'''
"#;

        let rules = extract_rules(content);
        assert_eq!(rules[0].regex, "abc");
    }

    #[test]
    fn test_block_without_id_is_skipped() {
        let content = r#"
[[rules]]
description = "No identifier here"
regex = "orphan-[0-9]+"
keywords = ["orphan"]
"#;

        assert!(extract_rules(content).is_empty());
    }

    #[test]
    fn test_block_without_regex_is_skipped() {
        let content = r#"
[[rules]]
id = "no-pattern"
description = "Rule without a pattern"
keywords = ["nothing"]
"#;

        assert!(extract_rules(content).is_empty());
    }

    #[test]
    fn test_skipped_block_does_not_stop_extraction() {
        let content = r#"
[[rules]]
description = "broken entry"

[[rules]]
id = "survivor"
regex = "sk_live_[0-9a-zA-Z]{24}"
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "survivor");
    }

    #[test]
    fn test_keywords_preserve_order() {
        let content = r#"
[[rules]]
id = "ordered"
regex = "x"
keywords = ["a", "b", "c"]
"#;

        let rules = extract_rules(content);
        assert_eq!(rules[0].keywords, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_keywords_yield_empty_list() {
        let content = r#"
[[rules]]
id = "keywordless"
regex = "x"
"#;

        let rules = extract_rules(content);
        assert!(rules[0].keywords.is_empty());
    }

    #[test]
    fn test_entropy_defaults_to_zero() {
        let content = r#"
[[rules]]
id = "no-entropy"
regex = "x"
"#;

        assert_eq!(extract_rules(content)[0].entropy, 0.0);
    }

    #[test]
    fn test_entropy_parses_decimal() {
        let content = r#"
[[rules]]
id = "high-entropy"
regex = "x"
entropy = 6.0
"#;

        assert_eq!(extract_rules(content)[0].entropy, 6.0);
    }

    #[test]
    fn test_entropy_accepts_integer_literal() {
        let content = r#"
[[rules]]
id = "integer-entropy"
regex = "x"
entropy = 4
"#;

        assert_eq!(extract_rules(content)[0].entropy, 4.0);
    }

    #[test]
    fn test_unparsable_entropy_defaults_to_zero() {
        let content = r#"
[[rules]]
id = "mangled-entropy"
regex = "x"
entropy = 1.2.3
"#;

        assert_eq!(extract_rules(content)[0].entropy, 0.0);
    }

    #[test]
    fn test_description_defaults_to_empty() {
        let content = r#"
[[rules]]
id = "undescribed"
regex = "x"
"#;

        assert_eq!(extract_rules(content)[0].description, "");
    }

    #[test]
    fn test_field_order_within_block_is_irrelevant() {
        let content = r#"
[[rules]]
keywords = ["ya29"]
entropy = 4.2
regex = '''ya29\.[0-9A-Za-z_-]+'''
id = "google-oauth-token"
description = "Google OAuth access token"
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].id, "google-oauth-token");
        assert_eq!(rules[0].regex, r"ya29\.[0-9A-Za-z_-]+");
        assert_eq!(rules[0].keywords, vec!["ya29"]);
        assert_eq!(rules[0].entropy, 4.2);
    }

    #[test]
    fn test_allowlist_subtable_does_not_confuse_fields() {
        let content = r#"
[[rules]]
id = "sidekiq-sensitive-url"
description = "Discovered a Sidekiq Sensitive URL"
regex = '''(?i)\bhttps?://[a-f0-9]{8}:[a-f0-9]{8}@gems\.contribsys\.com'''
keywords = ["contribsys"]

[rules.allowlist]
regexes = ['''example\.com''']
paths = ["testdata/config.rb"]
"#;

        let rules = extract_rules(content);
        assert_eq!(rules.len(), 1);
        assert_eq!(
            rules[0].regex,
            r"(?i)\bhttps?://[a-f0-9]{8}:[a-f0-9]{8}@gems\.contribsys\.com"
        );
        assert_eq!(rules[0].keywords, vec!["contribsys"]);
    }

    #[test]
    fn test_header_region_is_discarded() {
        let content = r#"
title = "gitleaks config"
id = "not-a-rule"
regex = "not-a-pattern"

[extend]
useDefault = true
"#;

        assert!(extract_rules(content).is_empty());
    }

    #[test]
    fn test_no_delimiters_returns_empty() {
        assert!(extract_rules("").is_empty());
        assert!(extract_rules("just some text").is_empty());
    }

    #[test]
    fn test_whitespace_only_block_is_skipped() {
        let content = "[[rules]]\n   \n\t\n";
        assert!(extract_rules(content).is_empty());
    }

    #[test]
    fn test_blocks_preserve_input_order() {
        let content = r#"
[[rules]]
id = "first"
regex = "a"

[[rules]]
id = "second"
regex = "b"

[[rules]]
id = "third"
regex = "c"
"#;

        let ids: Vec<_> = extract_rules(content).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let content = r#"
[[rules]]
id = "stable"
regex = '''npm_[A-Za-z0-9]{36}'''
keywords = ["npm_"]
entropy = 3.9
"#;

        assert_eq!(extract_rules(content), extract_rules(content));
    }
}
