//! Error types for dsnstat

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, lexing or walking a DSN file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Input errors
    /// The file could not be opened or read as text
    ///
    /// **Triggered by:** missing files, permission problems, non-UTF-8 content
    #[error("Failed to read {}: {message}", path.display())]
    ReadFailure {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error description
        message: String,
    },

    // Lexer errors
    /// A quoted region was opened but never closed
    ///
    /// **Example:** `(net "foo bar)` with `"` as the active quote
    #[error("Unterminated quoted region starting at line {line}")]
    UnterminatedQuote {
        /// Line on which the quoted region opened
        line: usize,
    },

    // Walker errors
    /// A `(` immediately followed by `)`
    ///
    /// **Example:** `(pcb ()())`
    #[error("Empty group at line {line}: '(' must be followed by a name")]
    EmptyGroup {
        /// Line of the offending `(`
        line: usize,
    },

    /// A `(` was the final token of the file
    #[error("Unexpected end of file after '(' at line {line}")]
    MissingGroupName {
        /// Line of the trailing `(`
        line: usize,
    },

    /// A `)` with no open group to close
    #[error("Unbalanced ')' at line {line}")]
    StackUnderflow {
        /// Line of the extra `)`
        line: usize,
    },

    /// A bare atom appeared before any group was opened
    #[error("Atom '{atom}' outside any group at line {line}")]
    AtomOutsideGroup {
        /// The atom text (lowercased)
        atom: String,
        /// Line of the atom
        line: usize,
    },

    /// Groups still open when the token stream ended
    #[error("Unbalanced parentheses: {depth} group(s) still open at end of file")]
    UnclosedGroups {
        /// Number of segments left on the path stack
        depth: usize,
    },

    // Driver errors
    /// The worker pool could not be constructed
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file could not be read
    ReadFailure,
    /// The file was read but its content is not a well-formed DSN token stream
    MalformedInput,
    /// Failure of the tool itself rather than of an input file
    Internal,
}

impl Error {
    /// Create a read failure for `path` from an I/O error
    pub fn read_failure(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Error::ReadFailure {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ReadFailure { .. } => ErrorKind::ReadFailure,

            Error::UnterminatedQuote { .. }
            | Error::EmptyGroup { .. }
            | Error::MissingGroupName { .. }
            | Error::StackUnderflow { .. }
            | Error::AtomOutsideGroup { .. }
            | Error::UnclosedGroups { .. } => ErrorKind::MalformedInput,

            Error::ThreadPool(_) => ErrorKind::Internal,
        }
    }

    /// True for errors scoped to a single input file
    pub fn is_file_scoped(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Internal)
    }
}

/// Result type for dsnstat operations
pub type Result<T> = std::result::Result<T, Error>;
