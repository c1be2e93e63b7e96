//! Lexical analysis for DSN files
//!
//! Converts raw file text into a stream of parenthesis and atom tokens.

mod dsn_scanner;
mod quote;
mod token;

pub use dsn_scanner::{tokenize, DsnScanner};
pub use quote::{strip_directives, QuoteStyle};
pub use token::{Token, TokenKind};
