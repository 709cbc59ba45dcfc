//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON object with all counters
    Json,
}

/// CLI arguments for newsdesk
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(author, version, about = "Turn raw social-media posts into short news items")]
#[command(long_about = r#"
Newsdesk reads every post document in the input directory, asks a
text-generation model to write a short news item for each one, and saves the
result as news_<id>.txt in the output directory.

Posts whose news file already exists are skipped, so runs can be repeated.
Models are tried in order; when one fails (quota, rate limit or any other
error) the next one is used.

The API key is read from the GEMINI_API_KEY environment variable.

Configuration files are loaded from (in priority order):
1. NEWSDESK_* environment variables
2. --config <path>     Explicit config file
3. ./newsdesk.toml     Project-level config
4. ~/.config/newsdesk/config.toml   Global config

Example:
  newsdesk
  newsdesk --input-dir tweets --output-dir news -m gemini-2.5-flash
  newsdesk -m gemini-3-pro-preview -m gemini-2.5-pro --delay-ms 5000
"#)]
pub struct Cli {
    /// Directory containing input post documents
    #[arg(short, long, value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving generated news files
    #[arg(short = 'O', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Models to try, most preferred first (can be specified multiple times)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Vec<String>,

    /// Pause after each generated file, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Append structured generation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub generation_log: Option<PathBuf>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show a progress spinner instead of one line per event
    #[arg(long, conflicts_with = "quiet")]
    pub spinner: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
