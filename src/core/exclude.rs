//! Exclusion set for directory traversal.
//!
//! Names of "heavy" directories (VCS metadata, dependency caches, build output)
//! that are pruned before the walker descends into them. Matching is on the
//! directory's basename at any depth, exact and case-sensitive.

use std::collections::BTreeSet;

/// Directories skipped unless `--no-default-excludes` is given.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    "dist",
    "build",
    ".cache",
    ".vscode",
    "coverage",
    "out",
    ".turbo",
    ".parcel-cache",
];

/// Immutable set of directory basenames that are never descended into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: BTreeSet<String>,
}

impl ExclusionSet {
    /// The built-in set of noise directories.
    pub fn defaults() -> Self {
        Self::from_names(DEFAULT_EXCLUDED_DIRS.iter().copied())
    }

    /// An empty set: nothing is pruned.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy of this set extended with `extra` names.
    pub fn with<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Returns `true` if this directory entry should be pruned from traversal.
    ///
    /// The traversal root (depth 0) is never pruned, so running inside a
    /// directory that happens to be called `build` still lists its files.
    pub fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|n| self.contains(n))
    }
}
