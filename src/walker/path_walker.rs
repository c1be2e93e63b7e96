use super::path::PathStack;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::stats::Accumulator;
use crate::vocabulary::Vocabulary;

/// Counters describing one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Tokens consumed
    pub tokens: usize,
    /// `(name` groups opened
    pub groups: usize,
    /// Recognized keyword atoms counted as leaves
    pub keyword_leaves: usize,
    /// Atoms that were not keywords
    pub ignored_atoms: usize,
    /// Deepest path recorded
    pub max_depth: usize,
}

/// Walks a token stream and counts every nested keyword path.
///
/// `(name` opens a path segment and records it, whatever `name` is.
/// A bare atom in the vocabulary is recorded as a leaf one level below the
/// current path and does not stay on the stack. Other atoms are ignored.
pub struct PathWalker<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> PathWalker<'v> {
    /// Creates a walker validating atoms against `vocabulary`
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        PathWalker { vocabulary }
    }

    /// Walks `tokens` into a fresh accumulator
    pub fn walk(&self, tokens: &[Token]) -> Result<Accumulator> {
        self.walk_with_summary(tokens).map(|(acc, _)| acc)
    }

    /// Walks `tokens` into a fresh accumulator and reports walk counters
    pub fn walk_with_summary(&self, tokens: &[Token]) -> Result<(Accumulator, WalkSummary)> {
        let mut acc = Accumulator::new();
        let summary = self.walk_into(tokens, &mut acc)?;
        Ok((acc, summary))
    }

    /// Walks `tokens` recording directly into `acc`.
    ///
    /// On error the counts recorded before the failure point stay in `acc`.
    pub fn walk_into(&self, tokens: &[Token], acc: &mut Accumulator) -> Result<WalkSummary> {
        let mut path = PathStack::new();
        let mut summary = WalkSummary {
            tokens: tokens.len(),
            ..WalkSummary::default()
        };
        let mut iter = tokens.iter();

        while let Some(token) = iter.next() {
            match &token.kind {
                TokenKind::LeftParen => {
                    let name = iter
                        .next()
                        .ok_or(Error::MissingGroupName { line: token.line })?;
                    if name.kind == TokenKind::RightParen {
                        return Err(Error::EmptyGroup { line: token.line });
                    }
                    path.push(name.text());
                    acc.record(path.as_str());
                    summary.groups += 1;
                    summary.max_depth = summary.max_depth.max(path.depth());
                }
                TokenKind::RightParen => {
                    if !path.pop() {
                        return Err(Error::StackUnderflow { line: token.line });
                    }
                }
                TokenKind::Atom(text) => {
                    if path.is_empty() {
                        return Err(Error::AtomOutsideGroup {
                            atom: text.clone(),
                            line: token.line,
                        });
                    }
                    if self.vocabulary.contains(text) {
                        path.push(text);
                        acc.record(path.as_str());
                        summary.keyword_leaves += 1;
                        summary.max_depth = summary.max_depth.max(path.depth());
                        path.pop();
                    } else {
                        summary.ignored_atoms += 1;
                    }
                }
            }
        }

        if !path.is_empty() {
            return Err(Error::UnclosedGroups { depth: path.depth() });
        }

        Ok(summary)
    }
}
