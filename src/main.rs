//! Chameleon binary entrypoint: acquire page text, extract brand colors,
//! synthesize the token set, and print a JSON report on stdout.

mod args;
mod color;
mod config;
mod extract;
mod net;
mod theme;
mod util;

use clap::Parser;
use serde::Serialize;
use tracing::{error, info};

use crate::args::Args;
use crate::config::Config;
use crate::extract::BrandColorResult;
use crate::theme::ChameleonTheme;

/// The machine-readable report printed on stdout.
#[derive(Serialize)]
struct Report<'a> {
    /// Extraction outcome.
    result: &'a BrandColorResult,
    /// Synthesized token set.
    theme: &'a ChameleonTheme,
}

/// What: Initialize the tracing subscriber on stderr.
///
/// Inputs:
/// - `args`: Parsed CLI flags; `--verbose` wins over `--log-level`.
///
/// Details:
/// - Logs go to stderr so stdout stays machine-readable JSON.
/// - `RUST_LOG` takes precedence over both flags when set.
fn init_tracing(args: &Args) {
    let level = if args.verbose {
        "debug"
    } else {
        args.log_level.as_str()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// What: Acquire the raw page text named by the CLI.
///
/// Inputs:
/// - `args`: Parsed CLI flags.
/// - `config`: Acquisition settings.
///
/// Output:
/// - `Ok(String)` raw text from stdin, a local file, or the network.
///
/// # Errors
/// - Returns `Err` when no target was given, the file is unreadable, or
///   every network attempt failed.
async fn acquire_text(args: &Args, config: &Config) -> net::Result<String> {
    if args.stdin {
        let text = std::io::read_to_string(std::io::stdin())?;
        info!(bytes = text.len(), "read page text from stdin");
        return Ok(text);
    }
    let Some(target) = args.target.as_deref() else {
        return Err("no target given; pass a URL/file or use --stdin".into());
    };
    if !args.no_fetch && util::looks_like_url(target) {
        return net::fetch_page_text(target, config).await;
    }
    let text = std::fs::read_to_string(target)
        .map_err(|e| format!("could not read {target}: {e}"))?;
    info!(path = target, bytes = text.len(), "read page text from file");
    Ok(text)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args);
    let config = Config::load(args.config.as_deref());

    let text = match acquire_text(&args, &config).await {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "acquisition failed");
            eprintln!("chameleon: {e}");
            std::process::exit(1);
        }
    };

    let Some(result) = extract::extract_brand_colors(&text) else {
        eprintln!("chameleon: could not extract brand colors from the page");
        std::process::exit(1);
    };

    let label = args
        .label
        .clone()
        .or_else(|| result.brand_name.clone())
        .unwrap_or_else(|| config.default_label.clone());
    let theme = theme::build_theme_from_colors(&result.primary, &label);

    let report = Report {
        result: &result,
        theme: &theme,
    };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("chameleon: could not render report: {e}");
            std::process::exit(1);
        }
    }
}
