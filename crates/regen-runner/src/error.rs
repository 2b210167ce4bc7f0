//! Error types for the per-file pipeline.

use std::path::PathBuf;

use regen_io::IoError;
use thiserror::Error;

/// Failure modes of processing one generation target.
///
/// Every variant is fatal for its file only; the run carries on with the
/// remaining files. Malformed regions are not represented here at all, the
/// template layer degrades gracefully instead.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Reading or writing the target failed.
    #[error("io error: {0}")]
    Io(#[from] IoError),

    /// The formatter collaborator rejected the candidate output. The file on
    /// disk stays untouched; the write step only runs after formatting
    /// succeeds.
    #[error("formatter failed on {path}: {source}")]
    Format {
        /// Target file.
        path: PathBuf,
        /// Formatter's reported cause.
        #[source]
        source: anyhow::Error,
    },

    /// A transformer reported failure. Transformers queued after it are
    /// skipped for this file.
    #[error("transformer {transformer:?} failed on {path}: {source}")]
    Transform {
        /// Name of the failing transformer.
        transformer: String,
        /// Target file.
        path: PathBuf,
        /// Transformer's reported cause.
        #[source]
        source: anyhow::Error,
    },
}

impl RunnerError {
    /// Short machine-readable kind, used in summaries.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Format { .. } => "format",
            Self::Transform { .. } => "transform",
        }
    }
}
