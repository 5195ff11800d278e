// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

pub use crate::cli::{Args, execute, run};
pub use crate::config::Config;
pub use crate::core::file_type::FileTypeRegistry;
pub use crate::core::ignore::{IgnoreRules, load_ignore_rules};
pub use crate::core::oracle::{FileTreeOracle, MemoryTree};
pub use crate::core::project::ProjectIndex;
pub use crate::core::statistic::{KOTLIN_FILE_TYPE, compute, count};
pub use crate::error::OracleError;
pub use crate::models::{FileRecord, Statistic, UsageCounts};
pub use crate::report::OutputFormat;
