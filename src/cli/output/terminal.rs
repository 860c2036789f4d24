//! Terminal output formatting with colors

use colored::Colorize;

use super::RecordRenderer;
use crate::error::RuleportError;
use crate::extractor::RuleRecord;

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_record(&self, record: &RuleRecord) -> String {
        let mut output = format!(
            "  {} {}: {}\n",
            "•".dimmed(),
            record.id.cyan(),
            truncate(&record.description, 50)
        );

        output.push_str(&format!(
            "    {} {}\n",
            "Regex:".dimmed(),
            truncate(&record.regex, 60)
        ));

        if !record.keywords.is_empty() {
            let shown: Vec<&str> = record.keywords.iter().take(3).map(String::as_str).collect();
            output.push_str(&format!("    {} {}", "Keywords:".dimmed(), shown.join(", ")));
            if record.keywords.len() > 3 {
                output.push_str(&format!(" (+{} more)", record.keywords.len() - 3));
            }
            output.push('\n');
        }

        if record.entropy > 0.0 {
            output.push_str(&format!("    {} {}\n", "Entropy:".dimmed(), record.entropy));
        }

        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRenderer for TerminalOutput {
    fn render_records(&self, records: &[RuleRecord]) -> Result<String, RuleportError> {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  EXTRACTED RULES".bold()
        ));

        if records.is_empty() {
            output.push_str(&format!("  {}\n", "No rules extracted.".yellow()));
            return Ok(output);
        }

        for record in records {
            output.push_str(&self.format_record(record));
            output.push('\n');
        }

        output.push_str(&format!(
            "{}\n{} rule(s)\n",
            "━".repeat(50).dimmed(),
            records.len().to_string().bold()
        ));

        Ok(output)
    }
}

/// Truncate to `max_chars` characters, marking the cut with an ellipsis
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
