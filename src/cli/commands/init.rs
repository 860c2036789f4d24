//! Init command - Initialize a new configuration file

use anyhow::Context;
use colored::Colorize;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::config::Config;
use crate::error::RuleportError;
use crate::exit_codes;

const CONFIG_FILENAME: &str = ".ruleport.toml";

/// Execute the init command
pub async fn execute(args: InitArgs) -> Result<i32, RuleportError> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        if args.non_interactive {
            eprintln!(
                "{} Configuration file already exists. Use --force to overwrite.",
                "Error:".red().bold()
            );
            return Ok(exit_codes::ERROR);
        }

        let overwrite = Confirm::new()
            .with_prompt("Configuration file already exists. Overwrite?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;

        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(exit_codes::SUCCESS);
        }
    }

    let config = Config::default();
    let config_content = config.to_toml()?;

    fs::write(config_path, &config_content).context("Failed to write configuration file")?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", CONFIG_FILENAME.cyan());
    println!(
        "  2. Run {} to preview what would be imported",
        "ruleport list".cyan()
    );
    println!(
        "  3. Run {} to emit the rule entries",
        "ruleport convert".cyan()
    );

    Ok(exit_codes::SUCCESS)
}
