//! Errors from collecting and writing file paths.

use std::io;
use std::path::PathBuf;

use super::collector::OutputTarget;

/// Errors that abort a collect run.
///
/// Unreadable directories below the start directory are not errors: they are
/// logged and counted in [`CollectSummary::skipped`](super::collector::CollectSummary).
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// The start directory is missing or cannot be listed.
    #[error("Cannot read start directory {}: {source}", path.display())]
    StartDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The start path exists but is a file or other non-directory.
    #[error("Start path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },
    /// The output cannot be created, written, or flushed.
    #[error("Cannot write output {target}: {source}")]
    Output {
        target: OutputTarget,
        #[source]
        source: io::Error,
    },
}
