//! # CLI Module
//!
//! This module defines the command-line interface for Ruleport using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `convert` | Convert a Gitleaks rule set into engine rule entries |
//! | `list` | List the rules extracted from a rule set |
//! | `check` | Validate extracted patterns and flag weak rules |
//! | `init` | Initialize a new configuration file |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Output formatters (Rust, JSON, Terminal)
//!
//! ## Global Options
//!
//! All commands support these global options:
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//!
//! ## Examples
//!
//! ```bash
//! # Convert a downloaded rule set into a paste-ready fragment
//! ruleport convert gitleaks.toml
//!
//! # Fetch the upstream config and write a complete generated module
//! ruleport convert --url https://raw.githubusercontent.com/gitleaks/gitleaks/master/config/gitleaks.toml --module -o gitleaks_rules.rs
//!
//! # Inspect what would be imported
//! ruleport list gitleaks.toml --limit 10
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{CheckArgs, ConvertArgs, GenerateManArgs, InitArgs, ListArgs};

/// Ruleport - Convert Gitleaks rule sets into native rule tables for secret-scanning engines
#[derive(Parser, Debug)]
#[command(name = "ruleport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a Gitleaks rule set into engine rule entries
    Convert(ConvertArgs),

    /// List the rules extracted from a Gitleaks rule set
    List(ListArgs),

    /// Validate extracted patterns and flag weak rules
    Check(CheckArgs),

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Generate man page (hidden, for packaging)
    #[command(hide = true)]
    GenerateMan(GenerateManArgs),
}
