// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "kus.toml";

/// Project settings read from `kus.toml`.
///
/// Root patterns are globs relative to the project root; `*` never crosses a
/// path separator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub source_roots: Vec<String>,
    pub test_roots: Vec<String>,
    /// Directory names pruned from the walk wherever they appear.
    pub exclude: Vec<String>,
    /// Decimals printed in text output.
    pub precision: usize,
    /// Extension to file type name, applied over the built-in associations.
    pub file_types: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_roots: to_strings(&["**/src/main/*", "**/src/*Main/*"]),
            test_roots: to_strings(&["**/src/test/*", "**/src/*Test/*"]),
            exclude: to_strings(&["build", "out", "target", "node_modules"]),
            precision: 2,
            file_types: BTreeMap::new(),
        }
    }
}

impl Config {
    /// # Errors
    ///
    /// Returns an error if `content` is not valid TOML or has unknown keys.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        debug!(file = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `kus.toml` from `dir` or its nearest ancestor, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be read or parsed.
    pub fn discover(dir: &Path) -> Result<Self> {
        find_config_file(dir).map_or_else(|| Ok(Self::default()), |path| Self::load(&path))
    }

    /// Adds comma-separated directory names to the exclusion list.
    pub fn extend_exclude(&mut self, list: &str) {
        for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            if !self.exclude.iter().any(|existing| existing == name) {
                self.exclude.push(name.to_owned());
            }
        }
    }
}

#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}
