// src/core/file_type.rs
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Type name reported for files no association claims.
pub const UNKNOWN_FILE_TYPE: &str = "UNKNOWN";

const BUILTIN_ASSOCIATIONS: &[(&str, &str)] = &[
    ("kt", "Kotlin"),
    ("kts", "Kotlin"),
    ("java", "Java"),
    ("groovy", "Groovy"),
    ("gradle", "Groovy"),
    ("scala", "Scala"),
    ("xml", "XML"),
    ("properties", "Properties"),
    ("json", "JSON"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
    ("md", "Markdown"),
    ("txt", "PLAIN_TEXT"),
];

/// Resolves a file's type name from its extension.
#[derive(Debug, Clone)]
pub struct FileTypeRegistry {
    associations: HashMap<String, String>,
}

impl Default for FileTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        let associations = BUILTIN_ASSOCIATIONS
            .iter()
            .map(|&(ext, name)| (ext.to_owned(), name.to_owned()))
            .collect();
        Self { associations }
    }

    /// Built-in associations with `overrides` applied on top.
    #[must_use]
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut registry = Self::new();
        for (ext, name) in overrides {
            registry.associate(ext, name);
        }
        registry
    }

    /// Maps `extension` (with or without a leading dot) to `type_name`.
    pub fn associate(&mut self, extension: &str, type_name: &str) {
        let extension = extension.trim().trim_start_matches('.');
        self.associations
            .insert(extension.to_owned(), type_name.to_owned());
    }

    #[must_use]
    pub fn file_type_name(&self, path: &Path) -> &str {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.associations.get(ext))
            .map_or(UNKNOWN_FILE_TYPE, String::as_str)
    }
}
