//! The generation orchestrator.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dashmap::DashMap;
use rayon::prelude::*;

use regen_template::{MarkerSyntax, Template};

use crate::config::{CancelToken, RunConfig};
use crate::diff::unified_diff;
use crate::error::RunnerError;
use crate::formatter::{Formatter, PassthroughFormatter};
use crate::report::{FileFailure, RunReport};
use crate::transformer::Transformer;

enum Outcome {
    Unchanged,
    Written,
    WouldWrite(String),
}

/// Walks root directories and regenerates marked regions in place.
///
/// Transformers are applied in registration order, each seeing the previous
/// one's mutations. Output reaches disk only after the formatter accepted it
/// and only when it differs byte-for-byte from the original read; the write
/// itself is atomic. Files are independent, so the per-file pipeline runs in
/// parallel.
pub struct Runner {
    transformers: Vec<Box<dyn Transformer>>,
    formatter: Box<dyn Formatter>,
    syntax: MarkerSyntax,
    config: RunConfig,
    cancel: CancelToken,
}

impl Runner {
    /// A runner with the given transformers and default collaborators
    /// (passthrough formatter, `@codegen` markers, default config).
    #[must_use]
    pub fn new(transformers: Vec<Box<dyn Transformer>>) -> Self {
        Self {
            transformers,
            formatter: Box::new(PassthroughFormatter),
            syntax: MarkerSyntax::default(),
            config: RunConfig::default(),
            cancel: CancelToken::new(),
        }
    }

    /// Replace the formatter collaborator.
    #[must_use]
    pub fn with_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// Replace the marker syntax.
    #[must_use]
    pub fn with_syntax(mut self, syntax: MarkerSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Replace the run configuration.
    #[must_use]
    pub fn with_config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Token for cancelling this runner's runs from another thread.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Process every generation target under the given roots.
    ///
    /// Per-file failures land in the report and do not stop the run unless
    /// [`RunConfig::fail_fast`] is set, which stops scheduling new files
    /// after the first failure. The written-file set is independent of
    /// execution order.
    pub fn run<P: AsRef<Path>>(&self, roots: &[P]) -> RunReport {
        let mut targets: Vec<PathBuf> = roots
            .iter()
            .flat_map(|root| regen_io::walk_files(root))
            .collect();
        targets.sort();
        targets.dedup();
        targets.retain(|path| self.transformers.iter().any(|t| t.selects(path)));

        let scanned = AtomicUsize::new(0);
        let results: DashMap<PathBuf, Result<Outcome, RunnerError>> = DashMap::new();
        // Fail-fast abort is scoped to this run; only the caller's token
        // outlives it.
        let aborted = AtomicBool::new(false);

        let process = |path: &PathBuf| {
            if self.cancel.is_cancelled() || aborted.load(Ordering::Relaxed) {
                return;
            }
            scanned.fetch_add(1, Ordering::Relaxed);

            let result = self.process_file(path);
            if let Err(error) = &result {
                tracing::warn!(path = %path.display(), error = %error, "file failed");
                if self.config.fail_fast {
                    aborted.store(true, Ordering::Relaxed);
                }
            }
            results.insert(path.clone(), result);
        };

        if self.config.workers > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.config.workers)
                .build()
            {
                Ok(pool) => pool.install(|| targets.par_iter().for_each(process)),
                Err(error) => {
                    tracing::warn!(%error, "dedicated pool unavailable, using the global one");
                    targets.par_iter().for_each(process);
                }
            }
        } else {
            targets.par_iter().for_each(process);
        }

        let mut report = RunReport {
            files_scanned: scanned.load(Ordering::Relaxed),
            ..RunReport::default()
        };
        for (path, result) in results {
            match result {
                Ok(Outcome::Unchanged) => report.files_unchanged += 1,
                Ok(Outcome::Written) => report.files_written.push(path),
                Ok(Outcome::WouldWrite(diff)) => report.dry_run_diffs.push((path, diff)),
                Err(error) => report.failures.push(FileFailure { path, error }),
            }
        }
        report.files_written.sort();
        report.dry_run_diffs.sort_by(|a, b| a.0.cmp(&b.0));
        report.failures.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            scanned = report.files_scanned,
            written = report.files_written.len(),
            unchanged = report.files_unchanged,
            failed = report.failures.len(),
            "run complete"
        );
        report
    }

    /// Steps 3-7 of the per-file pipeline: read, parse, transform, render,
    /// format, write-if-changed.
    fn process_file(&self, path: &Path) -> Result<Outcome, RunnerError> {
        let original = regen_io::read_text(path, self.config.max_file_size)?;
        let mut template = Template::parse_with(&self.syntax, &original);

        for transformer in self.transformers.iter().filter(|t| t.selects(path)) {
            tracing::debug!(
                path = %path.display(),
                transformer = transformer.name(),
                "applying"
            );
            transformer
                .apply(path, &mut template)
                .map_err(|source| RunnerError::Transform {
                    transformer: transformer.name().to_string(),
                    path: path.to_path_buf(),
                    source,
                })?;
        }

        let candidate = template.render();
        let formatted = self
            .formatter
            .format(&candidate, path)
            .map_err(|source| RunnerError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        if formatted == original {
            return Ok(Outcome::Unchanged);
        }
        if self.config.dry_run {
            return Ok(Outcome::WouldWrite(unified_diff(&original, &formatted)));
        }

        regen_io::write_atomic(path, formatted.as_bytes())?;
        tracing::info!(path = %path.display(), "regenerated");
        Ok(Outcome::Written)
    }
}
