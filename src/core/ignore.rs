// src/core/ignore.rs
pub mod loader;
pub mod rules;

pub use loader::{IGNORE_FILE_NAME, find_ignore_file, load_ignore_rules};
pub use rules::IgnoreRules;
