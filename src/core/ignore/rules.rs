// src/core/ignore/rules.rs
use anyhow::{Context as _, Result, bail};
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    pattern: Pattern,
    negated: bool,
    /// Only matches the entry itself when it is a directory.
    dir_only: bool,
}

/// Gitignore-style rules matched against paths relative to `base`, the
/// directory holding the ignore file.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    base: PathBuf,
    rules: Vec<Rule>,
}

impl IgnoreRules {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            rules: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Parses one line of an ignore file.
    ///
    /// Supported forms:
    /// - blank lines and `#` comments are skipped
    /// - `!` negates a rule
    /// - a leading `/` anchors the rule to the base directory
    /// - a trailing `/` restricts the rule to directories; every rule also
    ///   covers the contents of a matching directory
    /// - rules without a `/` match at any depth
    /// - one brace group such as `*.{kt,kts}` expands into several rules
    ///
    /// # Errors
    ///
    /// Returns an error for unbalanced braces, a rule with nothing left after
    /// stripping its markers, or invalid glob syntax.
    pub fn add_rule(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (rest, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |stripped| (stripped, true));
        let (body, anchored) = rest
            .strip_prefix('/')
            .map_or((rest, false), |stripped| (stripped, true));
        let dir_only = body.ends_with('/');
        let body = body.trim_end_matches('/');
        if body.is_empty() {
            bail!("Empty ignore rule: {line}");
        }

        for alternative in expand_braces(body)? {
            let base = if anchored || alternative.contains('/') {
                alternative
            } else {
                format!("**/{alternative}")
            };

            let mut globs = vec![(base.clone(), dir_only)];
            if !base.ends_with("**") {
                globs.push((format!("{base}/**"), false));
            }

            for (glob, dir_only) in globs {
                let pattern = Pattern::new(&glob)
                    .with_context(|| format!("Invalid ignore pattern: {glob}"))?;
                self.rules.push(Rule {
                    pattern,
                    negated,
                    dir_only,
                });
            }
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the file at `relative` (to the base directory) is ignored.
    #[must_use]
    pub fn matches<P: AsRef<Path>>(&self, relative: P) -> bool {
        self.is_ignored(relative.as_ref(), false)
    }

    /// Whether the directory at `relative` (to the base directory) is ignored.
    #[must_use]
    pub fn matches_dir<P: AsRef<Path>>(&self, relative: P) -> bool {
        self.is_ignored(relative.as_ref(), true)
    }

    /// Like [`matches`](Self::matches) for a path that includes the base
    /// directory. Paths outside the base are never ignored.
    #[must_use]
    pub fn matches_path(&self, path: &Path, is_dir: bool) -> bool {
        path.strip_prefix(&self.base)
            .is_ok_and(|relative| self.is_ignored(relative, is_dir))
    }

    /// Negated rules take precedence.
    fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        let path = normalize(relative);
        if path.is_empty() {
            return false;
        }

        let hit = |negated: bool| {
            self.rules
                .iter()
                .filter(|rule| rule.negated == negated && (is_dir || !rule.dir_only))
                .any(|rule| rule.pattern.matches_with(&path, MATCH_OPTIONS))
        };

        !hit(true) && hit(false)
    }
}

/// Joins the normal components of `path` with `/`.
fn normalize(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn expand_braces(body: &str) -> Result<Vec<String>> {
    let Some((prefix, rest)) = body.split_once('{') else {
        if body.contains('}') {
            bail!("Unmatched '}}' in ignore rule: {body}");
        }
        return Ok(vec![body.to_owned()]);
    };
    let Some((group, suffix)) = rest.split_once('}') else {
        bail!("Unmatched '{{' in ignore rule: {body}");
    };

    Ok(group
        .split(',')
        .map(|alternative| format!("{prefix}{}{suffix}", alternative.trim()))
        .collect())
}
