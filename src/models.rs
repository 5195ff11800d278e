// src/models.rs
pub mod file_record;
pub mod statistic;
pub mod usage_counts;

pub use file_record::FileRecord;
pub use statistic::Statistic;
pub use usage_counts::UsageCounts;
