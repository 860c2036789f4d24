//! CLI commands module

pub mod check;
pub mod convert;
pub mod generate_man;
pub mod init;
pub mod list;

use clap::Args;
use std::path::PathBuf;
use url::Url;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Rule set file to convert
    #[arg(value_name = "SOURCE", default_value = "gitleaks.toml")]
    pub source: PathBuf,

    /// Fetch the rule set from this URL instead of reading a file
    #[arg(long, value_name = "URL", conflicts_with = "source")]
    pub url: Option<Url>,

    /// Output format (rust, json)
    #[arg(short, long, default_value = "rust")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit a complete generated module instead of a paste-ready fragment
    #[arg(long)]
    pub module: bool,

    /// Override the first number to assign
    #[arg(long, value_name = "N")]
    pub start_number: Option<u32>,

    /// Convert rules even when a hand-written rule already covers them
    #[arg(long)]
    pub include_existing: bool,

    /// Convert at most N rules
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Rule set file to list
    #[arg(value_name = "SOURCE", default_value = "gitleaks.toml")]
    pub source: PathBuf,

    /// Fetch the rule set from this URL instead of reading a file
    #[arg(long, value_name = "URL", conflicts_with = "source")]
    pub url: Option<Url>,

    /// Show at most N rules
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Rule set file to check
    #[arg(value_name = "SOURCE", default_value = "gitleaks.toml")]
    pub source: PathBuf,

    /// Fetch the rule set from this URL instead of reading a file
    #[arg(long, value_name = "URL", conflicts_with = "source")]
    pub url: Option<Url>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Skip interactive prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the generate-man command
#[derive(Args, Debug)]
pub struct GenerateManArgs {
    /// Directory to write the man page into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output: PathBuf,
}

/// Output format for the convert command
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Rust,
    Json,
}
