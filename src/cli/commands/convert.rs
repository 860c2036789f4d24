//! Convert command - Run the full import pipeline

use colored::Colorize;
use std::path::PathBuf;

use super::{ConvertArgs, OutputFormat};
use crate::cli::output::{JsonOutput, RulesetRenderer, RustOutput};
use crate::config::Config;
use crate::error::{OutputError, RuleportError};
use crate::exit_codes;
use crate::extractor::extract_rules;
use crate::rules::Converter;
use crate::source::RuleSource;

/// Execute the convert command
pub async fn execute(
    args: ConvertArgs,
    config_path: Option<PathBuf>,
) -> Result<i32, RuleportError> {
    // --module wraps the output in a Rust source file, so it only makes
    // sense for the rust format
    if args.module && args.format != OutputFormat::Rust {
        eprintln!(
            "{} --module requires the rust output format",
            "Error:".red().bold()
        );
        return Ok(exit_codes::INVALID_ARGS);
    }

    let mut config = match config_path {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::load_or_default()?,
    };

    // CLI flags override the configuration file
    if let Some(start_number) = args.start_number {
        config.start_number = start_number;
    }
    if args.include_existing {
        config.exclude.builtin = false;
    }
    config.validate()?;

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

    let mut converter = Converter::new(config);
    if let Some(limit) = args.limit {
        converter.set_limit(limit);
    }
    let ruleset = converter.convert(records, source.describe());

    let renderer: Box<dyn RulesetRenderer> = match args.format {
        OutputFormat::Rust => Box::new(RustOutput::new(args.module)),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_ruleset(&ruleset)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|e| {
                RuleportError::Output(OutputError::FileWrite {
                    path: path.display().to_string(),
                    source: e,
                })
            })?;
            eprintln!(
                "{} Rules written to: {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{rendered}"),
    }

    eprintln!(
        "{}",
        format!(
            "Imported {} rules ({} skipped as already covered)",
            ruleset.len(),
            ruleset.skipped_existing().len()
        )
        .dimmed()
    );
    if let Some((first, last)) = ruleset.id_range() {
        eprintln!("{}", format!("Assigned ids {first} through {last}").dimmed());
    }

    Ok(exit_codes::SUCCESS)
}
