//! Command-line front end: extract the documentation for one symbol from a URL.
//!
//! ```text
//! extract_docs --url https://docs.example.com/api --func createUser
//! extract_docs --url https://docs.example.com/api --json --output docs.json
//! ```
//!
//! `DEFAULT_TIMEOUT` (seconds) and `DEFAULT_VERBOSE` (`true`/`1`) provide
//! defaults for `--timeout` and `--verbose`.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Parser};
use rs_docscrape::{extract_docs, Options};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "extract_docs", about = "Extract symbol documentation from an API reference page")]
struct Cli {
    /// Documentation page URL
    #[arg(short, long)]
    url: String,

    /// Function or method to focus on (default: extract everything)
    #[arg(short, long, default_value = "")]
    func: String,

    /// Fetch timeout in seconds
    #[arg(short, long, env = "DEFAULT_TIMEOUT", default_value = "30", value_parser = parse_seconds)]
    timeout: u64,

    /// Log pass-level diagnostics and a preview of the result
    #[arg(short, long, env = "DEFAULT_VERBOSE", action = ArgAction::SetTrue, value_parser = parse_flag)]
    verbose: bool,

    /// Write the result to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the full result as JSON
    #[arg(long)]
    json: bool,

    /// Do not prepend the page title
    #[arg(long)]
    no_title: bool,
}

// Env files written on Windows leave a trailing `\r`.
fn parse_seconds(s: &str) -> Result<u64, String> {
    s.trim()
        .parse()
        .map_err(|e| format!("invalid timeout '{}': {e}", s.trim()))
}

fn parse_flag(s: &str) -> Result<bool, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("invalid boolean '{other}'")),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let options = Options {
        timeout: Duration::from_secs(cli.timeout),
        verbose: cli.verbose,
        include_title: !cli.no_title,
        ..Options::default()
    };

    let result = extract_docs(&cli.url, &cli.func, &options)?;
    let rendered = if cli.json {
        result.to_json()?
    } else {
        result.content
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), "documentation written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
