// src/report.rs
use crate::models::UsageCounts;
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::Serialize;

pub const SOURCE_LABEL: &str = "Kotlin percentage in all source files";
pub const TEST_LABEL: &str = "Kotlin percentage in test source files";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source_percentage: f64,
    test_percentage: f64,
    counts: &'a UsageCounts,
}

/// Renders `counts` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(
    format: OutputFormat,
    counts: &UsageCounts,
    precision: usize,
    show_counts: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(counts, precision, show_counts)),
        OutputFormat::Json => render_json(counts),
    }
}

/// The two percentage labels, one per line, optionally followed by raw counts.
#[must_use]
pub fn render_text(counts: &UsageCounts, precision: usize, show_counts: bool) -> String {
    let statistic = counts.statistic();
    let mut lines = vec![
        format!("{SOURCE_LABEL}: {:.precision$}%", statistic.source_percentage),
        format!("{TEST_LABEL}: {:.precision$}%", statistic.test_percentage),
    ];

    if show_counts {
        lines.push(format!(
            "Kotlin source files: {} of {}",
            counts.kotlin_source, counts.total_source
        ));
        lines.push(format!(
            "Kotlin test source files: {} of {}",
            counts.kotlin_test, counts.total_test
        ));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(counts: &UsageCounts) -> Result<String> {
    let statistic = counts.statistic();
    let report = JsonReport {
        source_percentage: statistic.source_percentage,
        test_percentage: statistic.test_percentage,
        counts,
    };
    let mut output =
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    output.push('\n');
    Ok(output)
}
