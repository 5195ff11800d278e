// src/core/statistic.rs
use crate::core::oracle::FileTreeOracle;
use crate::error::OracleError;
use crate::models::{Statistic, UsageCounts};

/// File type name the host index reports for Kotlin sources.
pub const KOTLIN_FILE_TYPE: &str = "Kotlin";

/// Counts Kotlin and total files in source and test-source content.
///
/// Directories are skipped. A file that is both source and test-source content
/// is counted in both totals. The walk is never cut short.
///
/// # Errors
///
/// Only errors raised by the oracle's traversal are returned.
pub fn count<O>(oracle: &O) -> Result<UsageCounts, OracleError>
where
    O: FileTreeOracle + ?Sized,
{
    let mut counts = UsageCounts::new();

    oracle.iterate_content(&mut |file: &O::File| {
        if oracle.is_directory(file) {
            return true;
        }

        let is_kotlin = oracle.file_type_name(file) == KOTLIN_FILE_TYPE;
        if oracle.is_in_test_source_content(file) {
            counts.record_test(is_kotlin);
        }
        if oracle.is_in_source_content(file) {
            counts.record_source(is_kotlin);
        }
        true
    })?;

    Ok(counts)
}

/// Computes the Kotlin share of source and test-source files, in percent.
///
/// # Errors
///
/// Only errors raised by the oracle's traversal are returned.
#[inline]
pub fn compute<O>(oracle: &O) -> Result<Statistic, OracleError>
where
    O: FileTreeOracle + ?Sized,
{
    count(oracle).map(|counts| counts.statistic())
}
