//! Check command - Validate extracted rules before importing them

use colored::Colorize;
use regex::Regex;
use std::collections::HashSet;

use super::CheckArgs;
use crate::error::RuleportError;
use crate::exit_codes;
use crate::extractor::extract_rules;
use crate::source::RuleSource;

/// Execute the check command
///
/// Compiles every extracted pattern and reports rules that would not
/// work after import. Duplicate ids and rules without keywords are
/// reported as warnings.
pub async fn execute(args: CheckArgs) -> Result<i32, RuleportError> {
    let source = RuleSource::from_cli(args.source, args.url);
    let content = source.load().await?;
    let records = extract_rules(&content);

    eprintln!(
        "{}",
        format!("Parsed {} rules from {}", records.len(), source.describe()).dimmed()
    );

    if records.is_empty() {
        eprintln!(
            "{} No rules could be extracted from {}",
            "Warning:".yellow().bold(),
            source.describe().cyan()
        );
        return Ok(exit_codes::WARNINGS);
    }

    let mut invalid = 0usize;
    let mut duplicates: Vec<String> = Vec::new();
    let mut missing_keywords: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for record in &records {
        if let Err(e) = Regex::new(&record.regex) {
            invalid += 1;
            println!(
                "{} {} pattern does not compile",
                "✗".red().bold(),
                record.id.cyan()
            );
            for line in e.to_string().lines() {
                println!("    {}", line.dimmed());
            }
        }

        if !seen.insert(record.id.as_str()) {
            duplicates.push(record.id.clone());
        }

        if record.keywords.is_empty() {
            missing_keywords.push(record.id.clone());
        }
    }

    if !duplicates.is_empty() {
        println!(
            "{} {} duplicate id(s): {}",
            "Warning:".yellow().bold(),
            duplicates.len(),
            duplicates.join(", ")
        );
    }

    if !missing_keywords.is_empty() {
        println!(
            "{} {} rule(s) without keywords: {}",
            "Warning:".yellow().bold(),
            missing_keywords.len(),
            missing_keywords.join(", ")
        );
    }

    println!();
    if invalid > 0 {
        println!(
            "{} {} of {} patterns failed to compile",
            "Result:".red().bold(),
            invalid,
            records.len()
        );
        return Ok(exit_codes::INVALID_RULES);
    }

    if !duplicates.is_empty() || !missing_keywords.is_empty() {
        println!(
            "{} {} patterns compile, warnings above",
            "Result:".yellow().bold(),
            records.len()
        );
        return Ok(exit_codes::WARNINGS);
    }

    println!(
        "{} All {} patterns compile",
        "Result:".green().bold(),
        records.len()
    );

    Ok(exit_codes::SUCCESS)
}
