use serde::{Deserialize, Serialize};

/// A single token from a DSN file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Line number where the token starts (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Token { kind, line }
    }

    /// Shorthand for an atom token
    pub fn atom(text: impl Into<String>, line: usize) -> Self {
        Token::new(TokenKind::Atom(text.into()), line)
    }

    /// Text of the token as it appeared after lowercasing
    pub fn text(&self) -> &str {
        match &self.kind {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Atom(text) => text,
        }
    }
}

/// All possible token types in a DSN file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Any other run of characters, lowercased.
    ///
    /// Quoted regions are kept verbatim inside the atom, quote characters included.
    Atom(String),
}
