// src/core/ignore/loader.rs
use crate::core::ignore::IgnoreRules;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const IGNORE_FILE_NAME: &str = ".kusignore";

/// Finds the ignore file in `dir` or the nearest ancestor that has one.
#[must_use]
pub fn find_ignore_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(IGNORE_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the rules of the nearest `.kusignore`, or no rules if none exists.
/// The rules are relative to the directory holding the file.
///
/// # Errors
///
/// This function may return an error if:
/// * The `.kusignore` file exists but cannot be read
/// * A line contains invalid pattern syntax
#[inline]
pub fn load_ignore_rules(dir: &Path) -> Result<IgnoreRules> {
    let Some(ignore_file) = find_ignore_file(dir) else {
        return Ok(IgnoreRules::new());
    };
    let mut rules = IgnoreRules::with_base(ignore_file.parent().unwrap_or(dir));

    let content = fs::read_to_string(&ignore_file)
        .with_context(|| format!("Failed to read {}", ignore_file.display()))?;

    for (index, line) in content.lines().enumerate() {
        rules.add_rule(line).with_context(|| {
            format!("{}:{}", ignore_file.display(), index.saturating_add(1))
        })?;
    }

    debug!(file = %ignore_file.display(), "loaded ignore rules");
    Ok(rules)
}
