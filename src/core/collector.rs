//! Path collector: walk a directory tree, prune excluded directories, and write
//! every remaining file's relative path to an output, one per line.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::error::CollectError;
use super::exclude::ExclusionSet;

/// Where collected paths are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Truncate-and-write a file.
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Parses a CLI value: `-` means stdout, anything else is a file path.
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Traversal knobs. The default matches a plain recursive listing.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Order each directory's files, then its subdirectories, by file name.
    pub sort: bool,
    /// Descend into symlinked directories. Loops are skipped with a warning.
    pub follow_links: bool,
    /// Maximum depth below the start directory (files at depth 1 are direct children).
    pub max_depth: Option<usize>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Number of paths written.
    pub files: usize,
    /// Nested entries that could not be read and were skipped.
    pub skipped: usize,
    /// Excluded directories that were pruned without being listed.
    pub pruned: usize,
}

/// Collect every file under `root` into `output`.
///
/// The start directory is checked before the output is opened, so a missing
/// root leaves any existing output file untouched.
pub fn collect(
    root: &Path,
    exclusions: &ExclusionSet,
    output: &OutputTarget,
    options: &CollectOptions,
) -> Result<CollectSummary, CollectError> {
    check_start_directory(root)?;

    match output {
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|source| CollectError::Output {
                target: output.clone(),
                source,
            })?;
            write_paths(root, exclusions, options, BufWriter::new(file), output)
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout().lock();
            write_paths(root, exclusions, options, BufWriter::new(stdout), output)
        }
    }
}

/// Walk `root` and write one relative path per line to `writer`.
///
/// Within every directory, its files are written before anything below its
/// subdirectories. `output` only labels write errors.
pub fn write_paths<W: Write>(
    root: &Path,
    exclusions: &ExclusionSet,
    options: &CollectOptions,
    mut writer: W,
    output: &OutputTarget,
) -> Result<CollectSummary, CollectError> {
    let output_err = |source: io::Error| CollectError::Output {
        target: output.clone(),
        source,
    };

    let by_name = options.sort;
    let mut walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by(move |a, b| {
            let order = a.file_type().is_dir().cmp(&b.file_type().is_dir());
            if by_name {
                order.then_with(|| a.file_name().cmp(b.file_name()))
            } else {
                order
            }
        });
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut files = 0;
    let mut skipped = 0;
    let mut pruned = 0;

    let entries = walker.into_iter().filter_entry(|e| {
        if exclusions.is_excluded(e) {
            log::debug!("Pruned {}", e.path().display());
            pruned += 1;
            false
        } else {
            true
        }
    });

    for result in entries {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(CollectError::StartDirectory {
                    path: root.to_path_buf(),
                    source: err.into(),
                });
            }
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                skipped += 1;
                continue;
            }
        };

        if !is_listed_file(&entry) {
            continue;
        }

        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let line = normalize_separators(rel);
        writer.write_all(line.as_bytes()).map_err(output_err)?;
        writer.write_all(b"\n").map_err(output_err)?;
        files += 1;
    }

    writer.flush().map_err(output_err)?;

    let summary = CollectSummary {
        files,
        skipped,
        pruned,
    };
    log::info!(
        "Collected {} paths from {} ({} pruned, {} skipped)",
        summary.files,
        root.display(),
        summary.pruned,
        summary.skipped
    );
    Ok(summary)
}

/// The start directory must exist, be a directory, and be listable.
fn check_start_directory(root: &Path) -> Result<(), CollectError> {
    let metadata = std::fs::metadata(root).map_err(|source| CollectError::StartDirectory {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(CollectError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    std::fs::read_dir(root).map_err(|source| CollectError::StartDirectory {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Everything that is not a directory is listed. A symlink to a directory
/// counts as a directory even when links are not followed.
fn is_listed_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    !(file_type.is_symlink() && entry.path().is_dir())
}

/// Join the path's components with `/`, whatever the host separator is.
fn normalize_separators(rel: &Path) -> String {
    let mut out = String::new();
    for component in rel.components() {
        let part = match component {
            Component::Normal(name) => name,
            Component::CurDir => continue,
            other => other.as_os_str(),
        };
        if part.to_str().is_none() {
            log::warn!(
                "Path {} is not valid UTF-8; writing it lossily",
                rel.display()
            );
        }
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&part.to_string_lossy());
    }
    out
}
