// src/core.rs
pub mod file_type;
pub mod ignore;
pub mod oracle;
pub mod project;
pub mod statistic;
