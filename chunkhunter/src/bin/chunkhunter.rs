//! Chunk Hunter command line
//!
//! Scans `input/` for `.txt` documents, matches them against `chunks.txt`
//! and writes the reports to `output/`. Every path can be overridden.
//!
//! Run with: cargo run --release --bin chunkhunter

use anyhow::{Context, Result};
use chunkhunter::{ChunkHunter, HunterConfig, RunSummary};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scans text files for a set of predefined chunks", long_about = None)]
struct Args {
    /// Folder scanned recursively for .txt documents
    #[arg(short, long, default_value = chunkhunter::config::DEFAULT_INPUT_DIR)]
    input: PathBuf,

    /// Chunk dictionary, one phrase per line
    #[arg(short, long, default_value = chunkhunter::config::DEFAULT_DICTIONARY)]
    chunks: PathBuf,

    /// Folder receiving the reports
    #[arg(short, long, default_value = chunkhunter::config::DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> HunterConfig {
        HunterConfig {
            input_dir: self.input.clone(),
            dictionary: self.chunks.clone(),
            output_dir: self.output.clone(),
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &HunterConfig) -> Result<RunSummary> {
    let hunter = ChunkHunter::new(config).context("Unable to load the chunks database")?;
    hunter
        .run()
        .with_context(|| format!("Unable to scan {}", config.input_dir.display()))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args.config()) {
        Ok(summary) => {
            if !summary.failed.is_empty() {
                tracing::warn!(
                    failed = summary.failed.len(),
                    documents = summary.documents,
                    "some reports could not be written"
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
