//! Compliance scan CLI
//!
//! Analyzes a saved HTML page as if it had been fetched from `--url` and
//! prints the scan report as JSON. Reads the page from a file or stdin; the
//! tool never goes to the network.
//!
//! ```text
//! curl -s https://example.com > page.html
//! scan-cli --url https://example.com --input page.html --pretty
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use compliance_engine::{
    normalize_url, FilePageSource, MemoryScanStore, PageSource, ScanStore, Scanner,
    ScannerConfig, StaticPageSource,
};
use serde::Serialize;
use shared_types::{AnalysisResult, ScanReport};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the scanner
#[derive(Parser, Debug)]
#[command(name = "scan-cli")]
#[command(version, about = "Score a web page for privacy/legal compliance")]
struct Args {
    /// URL the page was fetched from (scheme defaults to https)
    #[arg(short, long)]
    url: String,

    /// HTML file to analyze, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Scanner configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Include the raw analysis details in the output
    #[arg(long)]
    details: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    report: &'a ScanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a AnalysisResult>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays valid JSON
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &args.config {
        Some(path) => ScannerConfig::from_file(path)?,
        None => ScannerConfig::default(),
    };

    let url = normalize_url(&args.url)?;
    info!("Scanning {} from {}", url, args.input);

    let (report, analysis) = if args.input == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read HTML from stdin")?;
        run(StaticPageSource::new().with_page(&url, &html), &url, config)?
    } else {
        run(FilePageSource::new(&args.input), &url, config)?
    };

    let output = Output {
        report: &report,
        analysis: args.details.then_some(&analysis),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}

fn run<P: PageSource>(
    source: P,
    url: &str,
    config: ScannerConfig,
) -> anyhow::Result<(ScanReport, AnalysisResult)> {
    let scanner = Scanner::new(source, MemoryScanStore::new(), config);
    let report = scanner
        .scan(url)
        .with_context(|| format!("Scan failed for {}", url))?;

    let stored = scanner
        .store()
        .find_fresh(&report.url, DateTime::<Utc>::MIN_UTC)?
        .context("Scan result was not stored")?;

    Ok((report, stored.result))
}
