//! Built-in rule coverage

/// Gitleaks rule ids that are already covered by the engine's hand-written
/// rule table. Converting these would produce duplicate detections, so they
/// are excluded by default.
pub const EXISTING_RULE_IDS: &[&str] = &[
    "1password-secret-key",
    "1password-service-account-token",
    "adafruit-api-key",
    "adobe-client-id",
    "adobe-client-secret",
    "age-secret-key",
    "airtable-api-key",
    "alibaba-access-key-id",
    "alibaba-secret-key",
    "anthropic-api-key",
    "artifactory-api-key",
    "asana-client-id",
    "asana-client-secret",
    "atlassian-api-token",
    "aws-access-token",
    "azure-ad-client-secret",
    "bitbucket-client-id",
    "cloudflare-api-key",
    "codecov-access-token",
    "cohere-api-token",
    "confluent-access-token",
    "databricks-api-token",
    "datadog-access-token",
    "digitalocean-access-token",
    "discord-api-token",
    "discord-client-id",
    "dropbox-api-token",
    "fastly-api-token",
    "gcp-api-key",
    "generic-api-key",
    "github-token",
    "gitlab-token",
    "slack-token",
    "stripe-api-key",
    "twilio-api-key",
];

/// Check if a Gitleaks id is covered by a hand-written rule
pub fn is_existing(id: &str) -> bool {
    EXISTING_RULE_IDS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_rule_ids_list() {
        assert_eq!(EXISTING_RULE_IDS.len(), 35);
        assert!(EXISTING_RULE_IDS.contains(&"aws-access-token"));
        assert!(EXISTING_RULE_IDS.contains(&"github-token"));
        assert!(EXISTING_RULE_IDS.contains(&"generic-api-key"));
        assert!(EXISTING_RULE_IDS.contains(&"stripe-api-key"));
    }

    #[test]
    fn test_is_existing_returns_true_for_covered_ids() {
        assert!(is_existing("slack-token"));
        assert!(is_existing("gcp-api-key"));
        assert!(is_existing("1password-secret-key"));
    }

    #[test]
    fn test_is_existing_returns_false_for_uncovered_ids() {
        assert!(!is_existing("openai-api-key"));
        assert!(!is_existing("unknown"));
        assert!(!is_existing(""));
        assert!(!is_existing("AWS-ACCESS-TOKEN")); // case-sensitive
    }
}
