//! The pluggable unit of work.

use std::path::Path;

use regen_template::Template;

/// A rule that selects target files and regenerates their region bodies.
///
/// Transformers are registered with the [`Runner`](crate::Runner) at
/// construction time, in order; during a run the registered set is read-only
/// and shared across workers. At most one run owns a file at a time, so
/// `apply` always has the only live template for its file.
pub trait Transformer: Send + Sync {
    /// Name used in logs and failure reports.
    fn name(&self) -> &str;

    /// Whether this transformer owns the file.
    ///
    /// Must be a pure, deterministic predicate over the path (a suffix match,
    /// typically). Files no transformer selects are never read or parsed.
    fn selects(&self, path: &Path) -> bool;

    /// Update region bodies via [`Template::set`].
    ///
    /// May read other files for input, but must not write the file being
    /// processed; committing the result is the runner's job.
    ///
    /// # Errors
    /// Any error aborts processing of this file: transformers queued after
    /// this one are skipped and the file on disk stays untouched.
    fn apply(&self, path: &Path, template: &mut Template) -> anyhow::Result<()>;
}
