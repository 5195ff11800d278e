// src/core/project.rs
use crate::config::Config;
use crate::core::file_type::FileTypeRegistry;
use crate::core::ignore::{IgnoreRules, load_ignore_rules};
use crate::core::oracle::FileTreeOracle;
use crate::error::OracleError;
use crate::models::FileRecord;
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

const ROOT_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// File index over one project directory on disk.
///
/// A file is test-source content when an ancestor directory matches a test
/// root, and source content when an ancestor matches a source root or a test
/// root. Hidden entries, excluded directories and ignored paths are not part
/// of the project content at all.
///
/// Symlinks are followed, but every file is reported once: links resolving
/// inside the project are skipped in favour of the real path, and several
/// links to the same outside target are walked only through the first one.
/// Dangling links and link loops are skipped.
#[derive(Debug)]
pub struct ProjectIndex {
    root: PathBuf,
    canonical_root: PathBuf,
    source_roots: Vec<Pattern>,
    test_roots: Vec<Pattern>,
    exclude: Vec<String>,
    ignore_rules: IgnoreRules,
    file_types: FileTypeRegistry,
}

impl ProjectIndex {
    /// Opens the project rooted at `root`. Relative paths are resolved against
    /// the working directory.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `root` does not exist or is not a directory
    /// * A source or test root pattern has invalid glob syntax
    /// * The project's `.kusignore` cannot be read or parsed
    pub fn open(root: &Path, config: &Config) -> Result<Self, OracleError> {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            env::current_dir()
                .map_err(|err| OracleError::Unavailable {
                    path: root.to_path_buf(),
                    reason: format!("cannot resolve working directory: {err}"),
                })?
                .join(root)
        };

        if !root.exists() {
            return Err(OracleError::Unavailable {
                path: root,
                reason: String::from("directory does not exist"),
            });
        }
        if !root.is_dir() {
            return Err(OracleError::Unavailable {
                path: root,
                reason: String::from("not a directory"),
            });
        }

        let ignore_rules = load_ignore_rules(&root).map_err(|err| OracleError::Ignore {
            path: root.clone(),
            message: format!("{err:#}"),
        })?;

        let canonical_root = fs::canonicalize(&root).unwrap_or_else(|_| root.clone());

        debug!(root = %root.display(), "opened project");
        Ok(Self {
            canonical_root,
            source_roots: compile_roots(&config.source_roots)?,
            test_roots: compile_roots(&config.test_roots)?,
            exclude: config.exclude.clone(),
            ignore_rules,
            file_types: FileTypeRegistry::with_overrides(&config.file_types),
            root,
        })
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        if is_hidden(entry) {
            return true;
        }

        let is_excluded_dir = entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.exclude.iter().any(|excluded| excluded == name));
        if is_excluded_dir {
            return true;
        }

        self.ignore_rules
            .matches_path(entry.path(), entry.file_type().is_dir())
    }

    /// Whether a symlinked entry should be walked. `seen` holds the outside
    /// targets already reached through another link.
    fn follows_link(&self, entry: &DirEntry, seen: &mut HashSet<PathBuf>) -> bool {
        if entry.depth() == 0 || !entry.path_is_symlink() {
            return true;
        }

        match fs::canonicalize(entry.path()) {
            Ok(target) if target.starts_with(&self.canonical_root) => {
                trace!(path = %entry.path().display(), "link into project skipped");
                false
            }
            Ok(target) => seen.insert(target),
            Err(_) => true,
        }
    }

    fn classify(&self, entry: &DirEntry) -> FileRecord {
        let relative = self.relative(entry.path());
        let is_directory = entry.file_type().is_dir();
        let in_test = lies_under(&self.test_roots, relative, is_directory);
        let in_source = in_test || lies_under(&self.source_roots, relative, is_directory);

        let file_type_name = if is_directory {
            String::new()
        } else {
            self.file_types.file_type_name(relative).to_owned()
        };

        FileRecord {
            path: relative.to_path_buf(),
            is_directory,
            file_type_name,
            in_source_content: in_source,
            in_test_source_content: in_test,
        }
    }
}

impl FileTreeOracle for ProjectIndex {
    type File = FileRecord;

    fn iterate_content(
        &self,
        visitor: &mut dyn FnMut(&FileRecord) -> bool,
    ) -> Result<(), OracleError> {
        let mut seen_targets = HashSet::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let excluded = self.is_excluded(entry);
                if excluded {
                    trace!(path = %entry.path().display(), "skipped");
                    return false;
                }
                self.follows_link(entry, &mut seen_targets)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_unresolvable(&err) => {
                    warn!(error = %err, "skipping unresolvable entry");
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            if entry.depth() == 0 {
                continue;
            }
            if !visitor(&self.classify(&entry)) {
                debug!("walk stopped by visitor");
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

fn compile_roots(patterns: &[String]) -> Result<Vec<Pattern>, OracleError> {
    patterns
        .iter()
        .map(|pattern| {
            let trimmed = pattern.trim().trim_matches('/');
            Pattern::new(trimmed).map_err(|source| OracleError::InvalidRoot {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Whether a directory containing `relative` (or `relative` itself, for a
/// directory) matches one of `roots`.
fn lies_under(roots: &[Pattern], relative: &Path, is_directory: bool) -> bool {
    let start = if is_directory {
        Some(relative)
    } else {
        relative.parent()
    };

    start.is_some_and(|dir| {
        dir.ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .any(|ancestor| {
                roots
                    .iter()
                    .any(|root| root.matches_path_with(ancestor, ROOT_MATCH_OPTIONS))
            })
    })
}

/// Dangling symlinks and symlink loops.
fn is_unresolvable(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_some()
        || err
            .io_error()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
