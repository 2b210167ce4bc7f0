//! Run configuration and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Configuration for one generation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Maximum target file size in bytes (default 1 MiB).
    pub max_file_size: u64,
    /// Number of worker threads; 0 uses the global rayon pool.
    pub workers: usize,
    /// Collect diffs instead of writing anything.
    pub dry_run: bool,
    /// Stop scheduling new files after the first per-file failure.
    pub fail_fast: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_file_size: 1_048_576,
            workers: 0,
            dry_run: false,
            fail_fast: false,
        }
    }
}

/// Cooperative cancellation flag shared between a caller and a running
/// [`Runner`](crate::Runner).
///
/// Cancelling stops new files from being scheduled. Files already in flight
/// finish, including their write, so cancellation never produces a partial
/// file; nothing already written is rolled back.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
