// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser};
use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::core::project::ProjectIndex;
use crate::core::statistic::count;
use crate::report::{OutputFormat, render};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory to scan (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Config file to use instead of the nearest kus.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra directory names to exclude (comma-separated)
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimals shown for percentages in text output
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Also print the raw file counts in text output
    #[arg(long)]
    pub counts: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Computes the statistic for `args.directory` and returns the rendered report.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The directory is not an accessible project
/// * The project tree cannot be walked
pub fn execute(args: &Args) -> Result<String> {
    let directory = if args.directory.is_absolute() {
        args.directory.clone()
    } else {
        env::current_dir()?.join(&args.directory)
    };

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&directory)?,
    };
    if let Some(exclude) = &args.exclude {
        config.extend_exclude(exclude);
    }
    let precision = args.precision.unwrap_or(config.precision);

    let index = ProjectIndex::open(&directory, &config)
        .with_context(|| format!("Failed to open project: {}", directory.display()))?;
    let counts = count(&index)
        .with_context(|| format!("Failed to scan project: {}", index.root().display()))?;

    info!(
        kotlin_source = counts.kotlin_source,
        total_source = counts.total_source,
        kotlin_test = counts.kotlin_test,
        total_test = counts.total_test,
        "computed Kotlin usage"
    );

    render(args.format, &counts, precision, args.counts)
}

/// Prints the report for `args`.
///
/// # Errors
///
/// See [`execute`].
pub fn run(args: &Args) -> Result<()> {
    let report = execute(args)?;
    print!("{report}");
    Ok(())
}
