// src/models/usage_counts.rs
use serde::Serialize;

use crate::models::Statistic;

/// Raw counters gathered during one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UsageCounts {
    pub kotlin_source: u64,
    pub total_source: u64,
    pub kotlin_test: u64,
    pub total_test: u64,
}

impl UsageCounts {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kotlin_source: 0,
            total_source: 0,
            kotlin_test: 0,
            total_test: 0,
        }
    }

    #[inline]
    pub const fn record_source(&mut self, is_kotlin: bool) {
        self.total_source = self.total_source.saturating_add(1);
        if is_kotlin {
            self.kotlin_source = self.kotlin_source.saturating_add(1);
        }
    }

    #[inline]
    pub const fn record_test(&mut self, is_kotlin: bool) {
        self.total_test = self.total_test.saturating_add(1);
        if is_kotlin {
            self.kotlin_test = self.kotlin_test.saturating_add(1);
        }
    }

    #[inline]
    #[must_use]
    pub fn source_percentage(&self) -> f64 {
        percentage(self.kotlin_source, self.total_source)
    }

    #[inline]
    #[must_use]
    pub fn test_percentage(&self) -> f64 {
        percentage(self.kotlin_test, self.total_test)
    }

    #[inline]
    #[must_use]
    pub fn statistic(&self) -> Statistic {
        Statistic::new(self.source_percentage(), self.test_percentage())
    }
}

/// Zero when nothing was counted, never `NaN`.
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
fn percentage(kotlin: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (kotlin as f64 / total as f64) * 100.0
}
