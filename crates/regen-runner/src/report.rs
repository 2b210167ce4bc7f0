//! End-of-run reporting.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::RunnerError;

/// One file that errored, with its cause.
#[derive(Debug)]
pub struct FileFailure {
    /// Target file.
    pub path: PathBuf,
    /// What went wrong.
    pub error: RunnerError,
}

/// Outcome of one generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Files that had at least one selecting transformer and entered the
    /// pipeline. Unselected files are not counted; they were never read.
    pub files_scanned: usize,
    /// Files whose regenerated content already matched the bytes on disk.
    pub files_unchanged: usize,
    /// Files rewritten, sorted. Empty for dry runs.
    pub files_written: Vec<PathBuf>,
    /// Per-file failures, sorted by path.
    pub failures: Vec<FileFailure>,
    /// Unified diffs collected during a dry run, one per file that would
    /// have been written.
    pub dry_run_diffs: Vec<(PathBuf, String)>,
}

impl RunReport {
    /// A run counts as successful only when zero files errored.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Flat serializable view for logs and tooling.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            files_scanned: self.files_scanned,
            files_unchanged: self.files_unchanged,
            files_written: self
                .files_written
                .iter()
                .map(|path| path.display().to_string())
                .collect(),
            failures: self
                .failures
                .iter()
                .map(|failure| FailureSummary {
                    path: failure.path.display().to_string(),
                    kind: failure.error.kind(),
                    message: failure.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Serializable counterpart of [`RunReport`].
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Files that entered the pipeline.
    pub files_scanned: usize,
    /// Files left untouched because output matched disk.
    pub files_unchanged: usize,
    /// Rewritten files.
    pub files_written: Vec<String>,
    /// Stringified per-file failures.
    pub failures: Vec<FailureSummary>,
}

/// One failure in a [`RunSummary`].
#[derive(Debug, Serialize)]
pub struct FailureSummary {
    /// Target file.
    pub path: String,
    /// Error category: `io`, `format`, or `transform`.
    pub kind: &'static str,
    /// Rendered error chain head.
    pub message: String,
}
