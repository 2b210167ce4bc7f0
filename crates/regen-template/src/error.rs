//! Error types for template parsing.

use thiserror::Error;

/// Errors from the opt-in strict parse path.
///
/// The default parser never fails; malformed input degrades gracefully
/// (unterminated regions extend to end of file, duplicate names are
/// first-wins).
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The same region name appears more than once in one file.
    #[error("duplicate region name: {0:?}")]
    DuplicateName(String),
}
