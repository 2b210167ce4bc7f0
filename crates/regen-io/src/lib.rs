#![allow(clippy::doc_markdown)]

//! regen-io - Filesystem primitives for the regeneration pipeline
//!
//! The four operations the orchestrator needs from the filesystem, nothing
//! more: guarded text read, atomic replace, recursive hidden-skipping walk,
//! and the error taxonomy tying them together.
//!
//! # Features
//!
//! - **Guarded reads**: size limit and NUL-byte binary detection before a
//!   file is ever treated as text
//! - **Atomic writes**: temp file plus rename, so a crash mid-write never
//!   leaves a truncated target
//! - **Deterministic walks**: regular files only, hidden entries skipped,
//!   sorted output
//!
//! # Architecture
//!
//! ```text
//! regen-io/src/
//! ├── lib.rs    # Re-exports (this file)
//! ├── error.rs  # IoError enum (thiserror)
//! ├── read.rs   # read_text + binary detection
//! ├── write.rs  # write_atomic
//! └── walk.rs   # walk_files
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod read;
mod walk;
mod write;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::IoError;
pub use read::{is_binary, read_text};
pub use walk::walk_files;
pub use write::write_atomic;
