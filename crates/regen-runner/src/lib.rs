#![allow(clippy::doc_markdown)]

//! regen-runner - Orchestrates regeneration of marked regions across a tree
//!
//! Walks one or more root directories, decides which files are generation
//! targets, regenerates their marked regions through registered transformers,
//! and commits changes to disk only when bytes actually differ.
//!
//! # Features
//!
//! - **Write-if-changed**: byte-identical output never touches disk, so a
//!   stable tree produces zero writes and zero VCS churn
//! - **Parallel pipeline**: files are independent, so the per-file
//!   read/transform/format/write pipeline runs on a rayon pool
//! - **Per-file failure isolation**: one file's error is reported and the
//!   run continues, unless fail-fast is requested
//! - **Dry runs**: collect unified diffs instead of writing
//!
//! # Architecture
//!
//! ```text
//! regen-runner/src/
//! ├── lib.rs         # Re-exports (this file)
//! ├── error.rs       # RunnerError enum (thiserror)
//! ├── config.rs      # RunConfig, CancelToken
//! ├── transformer.rs # Transformer trait (the plugin surface)
//! ├── formatter.rs   # Formatter boundary + passthrough default
//! ├── diff.rs        # Unified diff rendering for dry runs
//! ├── report.rs      # RunReport, RunSummary
//! └── runner.rs      # Runner: walk, select, pipeline, write-if-changed
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use regen_runner::{Runner, RunConfig, Transformer};
//!
//! let runner = Runner::new(vec![Box::new(MyTableTransformer)])
//!     .with_config(RunConfig::default());
//! let report = runner.run(&["src"]);
//! assert!(report.is_success());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod diff;
mod error;
mod formatter;
mod report;
mod runner;
mod transformer;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use config::{CancelToken, RunConfig};
pub use diff::unified_diff;
pub use error::RunnerError;
pub use formatter::{Formatter, PassthroughFormatter};
pub use report::{FailureSummary, FileFailure, RunReport, RunSummary};
pub use runner::Runner;
pub use transformer::Transformer;

// The template model is half of the plugin signature; re-export it so
// transformer implementations need only this crate.
pub use regen_template::{Fragment, MarkerSyntax, Template};
