//! Exit codes for the CLI
//!
//! Standard exit codes used by the Ruleport CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Conversion completed, rules emitted |
//! | 1 | `INVALID_RULES` | Invalid rules | Extracted pattern does not compile |
//! | 2 | `WARNINGS` | Warnings | Zero rules extracted, keyword-less rules |
//! | 3 | `ERROR` | Runtime error | File not found, network error |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Incompatible option combination |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ruleport::cli::exit_codes;
//!
//! // Return success
//! std::process::exit(exit_codes::SUCCESS);
//!
//! // Return invalid rules
//! std::process::exit(exit_codes::INVALID_RULES);
//! ```

/// Success - operation completed normally.
///
/// Used when:
/// - Conversion completed and rules were emitted
/// - Listing or checking completed with nothing to flag
/// - Configuration file was written
pub const SUCCESS: i32 = 0;

/// Invalid rules detected (patterns that the engine cannot compile).
///
/// Used when:
/// - `check` finds an extracted pattern the regex engine rejects
pub const INVALID_RULES: i32 = 1;

/// Warnings (degraded but not failing conditions).
///
/// Used when:
/// - A rule set yields zero extractable rules
/// - `check` finds keyword-less rules or duplicate ids
pub const WARNINGS: i32 = 2;

/// Runtime error (file not found, network error, etc.).
///
/// Used when:
/// - Rule set file not found or unreadable
/// - Fetching the rule set over HTTP failed
/// - Configuration file invalid
/// - Output file could not be written
pub const ERROR: i32 = 3;

/// Invalid arguments (incompatible options, bad values).
///
/// Used when:
/// - `--module` is combined with a non-Rust output format
/// - Invalid command-line arguments
pub const INVALID_ARGS: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [SUCCESS, INVALID_RULES, WARNINGS, ERROR, INVALID_ARGS];
        for i in 0..codes.len() {
            for j in (i + 1)..codes.len() {
                assert_ne!(
                    codes[i], codes[j],
                    "Exit codes should be unique: {} and {} are both {}",
                    i, j, codes[i]
                );
            }
        }
    }

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(INVALID_RULES, 1);
        assert_eq!(WARNINGS, 2);
        assert_eq!(ERROR, 3);
        assert_eq!(INVALID_ARGS, 4);
    }
}
