// src/core/oracle.rs
use crate::error::OracleError;
use crate::models::FileRecord;

/// Traversal and classification service for one project's file tree.
///
/// Implementors decide what "source content" and "test-source content" mean;
/// consumers only ask.
pub trait FileTreeOracle {
    type File;

    /// Visits every entry reachable from the project root exactly once, in any
    /// order. The walk stops early as soon as `visitor` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying tree cannot be walked.
    fn iterate_content(
        &self,
        visitor: &mut dyn FnMut(&Self::File) -> bool,
    ) -> Result<(), OracleError>;

    fn is_directory(&self, file: &Self::File) -> bool;

    fn is_in_source_content(&self, file: &Self::File) -> bool;

    fn is_in_test_source_content(&self, file: &Self::File) -> bool;

    fn file_type_name<'a>(&'a self, file: &'a Self::File) -> &'a str;
}

/// An oracle over records that are already known, e.g. from another index.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    records: Vec<FileRecord>,
}

impl MemoryTree {
    #[inline]
    #[must_use]
    pub const fn new(records: Vec<FileRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    #[inline]
    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }
}

impl FromIterator<FileRecord> for MemoryTree {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FileTreeOracle for MemoryTree {
    type File = FileRecord;

    fn iterate_content(
        &self,
        visitor: &mut dyn FnMut(&FileRecord) -> bool,
    ) -> Result<(), OracleError> {
        for record in &self.records {
            if !visitor(record) {
                break;
            }
        }
        Ok(())
    }

    fn is_directory(&self, file: &FileRecord) -> bool {
        file.is_directory
    }

    fn is_in_source_content(&self, file: &FileRecord) -> bool {
        file.in_source_content
    }

    fn is_in_test_source_content(&self, file: &FileRecord) -> bool {
        file.in_test_source_content
    }

    fn file_type_name<'a>(&'a self, file: &'a FileRecord) -> &'a str {
        &file.file_type_name
    }
}
