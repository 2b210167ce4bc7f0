#![allow(clippy::doc_markdown)]

//! regen-template - Marked-region templates for semi-generated files
//!
//! Parses files that are mostly hand-written but contain clearly delimited
//! regions whose content a generator rewrites in place. File content is an
//! opaque sequence of lines; no language is parsed or understood.
//!
//! # Features
//!
//! - **Lossless**: rendering an unmodified template reproduces the input
//!   byte-for-byte, line-ending style included
//! - **Lenient**: an unterminated region simply extends to end of file, and
//!   a duplicated region name leaves later occurrences untouched
//! - **Configurable markers**: `@codegen(name)` / `@end` by default, any
//!   token pair on request
//!
//! # Architecture
//!
//! ```text
//! regen-template/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # TemplateError enum (thiserror)
//! ├── splitter.rs # Terminator-preserving line splitting
//! ├── syntax.rs   # MarkerSyntax: begin/end marker recognition
//! ├── parser.rs   # Line sequence -> fragment sequence
//! └── template.rs # Fragment, Template (mutation + rendering)
//! ```
//!
//! # Example
//!
//! ```rust
//! use regen_template::Template;
//!
//! let mut t = Template::parse("fn main() {\n// @codegen(body)\n// @end\n}\n");
//! t.set("body", "    println!(\"hi\");\n");
//! assert!(t.render().contains("println!"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod parser;
mod splitter;
mod syntax;
mod template;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::TemplateError;
pub use splitter::split_lines;
pub use syntax::{DEFAULT_BEGIN_TOKEN, DEFAULT_END_TOKEN, MarkerSyntax};
pub use template::{Fragment, Template};
