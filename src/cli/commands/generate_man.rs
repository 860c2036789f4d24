//! Generate man page command

use clap::CommandFactory;
use std::fs;

use super::GenerateManArgs;
use crate::cli::Cli;
use crate::error::{ConfigError, OutputError, RuleportError};
use crate::exit_codes;

/// Execute the generate-man command
pub async fn execute(args: GenerateManArgs) -> Result<i32, RuleportError> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let output_path = args.output.join("ruleport.1");

    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).map_err(|e| {
        RuleportError::Config(ConfigError::Serialize {
            message: format!("Failed to generate man page: {}", e),
        })
    })?;

    fs::write(&output_path, buffer).map_err(|e| {
        RuleportError::Output(OutputError::FileWrite {
            path: output_path.display().to_string(),
            source: e,
        })
    })?;

    println!("Man page generated: {}", output_path.display());

    Ok(exit_codes::SUCCESS)
}
