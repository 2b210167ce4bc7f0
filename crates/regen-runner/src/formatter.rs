//! The formatter collaborator boundary.

use std::path::Path;

/// Post-processing hook between rendering and the write-if-changed step.
///
/// Invoked once per candidate output. The real implementation is supplied by
/// the host (a pretty-printer, usually); this crate only defines the seam.
pub trait Formatter: Send + Sync {
    /// Format the rendered candidate. `path` is a hint so implementations can
    /// pick rules by file type.
    ///
    /// # Errors
    /// A failure is fatal for that file only and leaves it untouched on disk.
    fn format(&self, source: &str, path: &Path) -> anyhow::Result<String>;
}

/// Identity formatter, the default collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl Formatter for PassthroughFormatter {
    fn format(&self, source: &str, _path: &Path) -> anyhow::Result<String> {
        Ok(source.to_string())
    }
}
