//! List command - Show extracted rules without converting them

use colored::Colorize;

use super::ListArgs;
use crate::cli::output::{RecordRenderer, TerminalOutput};
use crate::error::RuleportError;
use crate::exit_codes;
use crate::extractor::extract_rules;
use crate::source::RuleSource;

/// Execute the list command
pub async fn execute(args: ListArgs) -> Result<i32, RuleportError> {
    let source = RuleSource::from_cli(args.source, args.url);
    let content = source.load().await?;
    let mut records = extract_rules(&content);

    eprintln!(
        "{}",
        format!("Parsed {} rules from {}", records.len(), source.describe()).dimmed()
    );

    let renderer = TerminalOutput::new();

    if records.is_empty() {
        print!("{}", renderer.render_records(&records)?);
        return Ok(exit_codes::WARNINGS);
    }

    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    print!("{}", renderer.render_records(&records)?);

    Ok(exit_codes::SUCCESS)
}
