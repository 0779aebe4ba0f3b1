//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sentiscope CLI - Classify text on a 7-point sentiment scale.
#[derive(Debug, Parser)]
#[command(name = "sentiscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true, env = sentiscope_sdk::API_URL_ENV)]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (label only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether the classification service is reachable
    Health,

    /// Analyze the sentiment of a text
    Analyze(AnalyzeArgs),

    /// Analyze several texts in one atomic request
    Batch(BatchArgs),

    /// Show example reviews, or analyze one
    Examples(ExamplesArgs),

    /// Show the sentiment scale
    Scale,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Text to analyze (words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Also show 2-decimal probabilities
    #[arg(short, long)]
    pub detailed: bool,
}

impl AnalyzeArgs {
    /// The text as one string
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Texts to analyze
    pub texts: Vec<String>,

    /// Read texts from file (one per line, blank lines skipped)
    #[arg(short = 'i', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for the examples command.
#[derive(Debug, Parser)]
pub struct ExamplesArgs {
    /// Analyze the first example for this score (-3..3)
    #[arg(short, long = "try", allow_negative_numbers = true)]
    pub try_score: Option<i64>,

    /// Also show 2-decimal probabilities
    #[arg(short, long)]
    pub detailed: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
