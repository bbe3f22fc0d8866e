//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Chameleon - extract a site's brand color and synthesize preview design tokens
#[derive(Parser, Debug)]
#[command(name = "chameleon")]
#[command(version)]
#[command(about = "Extract a site's brand color and synthesize preview design tokens", long_about = None)]
pub struct Args {
    /// URL or local file to analyze (omit when reading from --stdin)
    pub target: Option<String>,

    /// Read the page text from standard input instead of a target
    #[arg(long)]
    pub stdin: bool,

    /// Theme label; defaults to the mined brand name when available
    #[arg(short, long)]
    pub label: Option<String>,

    /// Path to a TOML configuration file (timeouts, relay list)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Treat the target as a local file even when it looks like a URL
    #[arg(long)]
    pub no_fetch: bool,
}
