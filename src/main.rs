//! Ruleport - A CLI tool to import Gitleaks detection rules into an internal secret scanner
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod config;
mod error;
mod extractor;
mod rules;
mod source;

use error::RuleportError;

/// Exit codes for the CLI
pub mod exit_codes {
    /// Success - rules imported or checked cleanly
    pub const SUCCESS: i32 = 0;
    /// One or more extracted patterns failed to compile
    pub const INVALID_RULES: i32 = 1;
    /// Warnings found but not blocking
    pub const WARNINGS: i32 = 2;
    /// Configuration or runtime error
    pub const ERROR: i32 = 3;
    /// Invalid command line arguments
    pub const INVALID_ARGS: i32 = 4;
}

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<(), RuleportError> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Convert(args) => cli::commands::convert::execute(args, cli.config).await,
        Commands::List(args) => cli::commands::list::execute(args).await,
        Commands::Check(args) => cli::commands::check::execute(args).await,
        Commands::Init(args) => cli::commands::init::execute(args).await,
        Commands::GenerateMan(args) => cli::commands::generate_man::execute(args).await,
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
