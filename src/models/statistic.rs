// src/models/statistic.rs
use serde::Serialize;

/// Share of Kotlin files, in percent, among source and test-source files.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Statistic {
    pub source_percentage: f64,
    pub test_percentage: f64,
}

impl Statistic {
    #[inline]
    #[must_use]
    pub const fn new(source_percentage: f64, test_percentage: f64) -> Self {
        Self {
            source_percentage,
            test_percentage,
        }
    }
}
