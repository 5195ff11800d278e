// src/models/file_record.rs

use std::path::PathBuf;

/// A single entry reported by a [`FileTreeOracle`](crate::core::oracle::FileTreeOracle).
///
/// Every flag is supplied by the oracle; the statistic only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub is_directory: bool,
    pub file_type_name: String,
    pub in_source_content: bool,
    pub in_test_source_content: bool,
}

impl FileRecord {
    #[inline]
    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
            file_type_name: String::new(),
            in_source_content: false,
            in_test_source_content: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn file(path: impl Into<PathBuf>, file_type_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
            file_type_name: file_type_name.into(),
            in_source_content: false,
            in_test_source_content: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn in_source(mut self) -> Self {
        self.in_source_content = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn in_test_source(mut self) -> Self {
        self.in_test_source_content = true;
        self
    }
}
