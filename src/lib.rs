//! # dsnstat - keyword path statistics for DSN files
//!
//! Reads a corpus of Specctra DSN design files (a parenthesized,
//! S-expression-like interchange format used by PCB tools) and reports, for
//! every nested keyword path seen, how many times it occurred.
//!
//! ## Quick Start
//!
//! ```rust
//! use dsnstat::{process_source, Vocabulary};
//!
//! # fn main() -> dsnstat::Result<()> {
//! let counts = process_source("(pcb (structure (layer top)))", Vocabulary::builtin())?;
//!
//! assert_eq!(counts.get("pcb"), 1);
//! assert_eq!(counts.get("pcb.structure"), 1);
//! assert_eq!(counts.get("pcb.structure.layer"), 1);
//! assert_eq!(counts.get("pcb.structure.layer.top"), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! File text → DsnScanner → Tokens → PathWalker → Accumulator → report
//! ```
//!
//! - [`DsnScanner`] - detects the file's quote character, strips quote
//!   directives and escaped quotes, lowercases, and splits on parentheses and
//!   whitespace without breaking quoted regions
//! - [`PathWalker`] - walks the tokens with an explicit path stack; every
//!   `(name` records its path, keyword atoms record a leaf path
//! - [`Accumulator`] - path → count mapping, merged across files
//! - [`CorpusRun`] - per-file driver; a file either contributes all of its
//!   counts or none of them
//!
//! ## Error Handling
//!
//! Malformed files are rejected as a whole:
//!
//! ```rust
//! use dsnstat::{process_source, Error, ErrorKind, Vocabulary};
//!
//! let err = process_source("(pcb ()())", Vocabulary::builtin()).unwrap_err();
//! assert_eq!(err, Error::EmptyGroup { line: 1 });
//! assert_eq!(err.kind(), ErrorKind::MalformedInput);
//! ```
//!
//! ## Multiple Files
//!
//! ```rust
//! use dsnstat::{Accumulator, process_source, Vocabulary};
//!
//! # fn main() -> dsnstat::Result<()> {
//! let mut total = Accumulator::new();
//! for text in ["(pcb (pcb))", "(pcb (pcb))"] {
//!     total.merge(process_source(text, Vocabulary::builtin())?);
//! }
//! assert_eq!(total.get("pcb"), 2);
//! assert_eq!(total.get("pcb.pcb"), 2);
//! # Ok(())
//! # }
//! ```

/// Version of dsnstat
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod corpus;
pub mod error;
pub mod lexer;
pub mod parallel;
pub mod report;
pub mod stats;
pub mod vocabulary;
pub mod walker;

// Re-export main types
pub use corpus::{process_file, process_files, process_source, CorpusRun, FileOutcome};
pub use error::{Error, ErrorKind, Result};
pub use lexer::{tokenize, DsnScanner, QuoteStyle, Token, TokenKind};
pub use parallel::{process_files_parallel, ParallelConfig};
pub use stats::Accumulator;
pub use vocabulary::Vocabulary;
pub use walker::{PathStack, PathWalker, WalkSummary};
