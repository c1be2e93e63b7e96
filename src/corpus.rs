//! Corpus driver
//!
//! Runs the lexer and walker over one file at a time. Each file is counted
//! into its own scratch [`Accumulator`] which is merged into the run total
//! only when the whole file succeeds, so a failing file contributes nothing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::lexer::tokenize;
use crate::stats::Accumulator;
use crate::vocabulary::Vocabulary;
use crate::walker::{PathWalker, WalkSummary};

/// Lex and walk the text of one file
pub fn process_source(text: &str, vocabulary: &Vocabulary) -> Result<Accumulator> {
    process_source_with_summary(text, vocabulary).map(|(acc, _)| acc)
}

/// Lex and walk the text of one file, keeping the walk counters
pub fn process_source_with_summary(
    text: &str,
    vocabulary: &Vocabulary,
) -> Result<(Accumulator, WalkSummary)> {
    let tokens = tokenize(text)?;
    PathWalker::new(vocabulary).walk_with_summary(&tokens)
}

/// Result of processing one input file
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// The input path
    pub path: PathBuf,
    /// Per-file counts, or the reason the file was rejected
    pub result: Result<Accumulator>,
}

/// Read and process one file
pub fn process_file(path: &Path, vocabulary: &Vocabulary) -> FileOutcome {
    let result = fs::read_to_string(path)
        .map_err(|e| Error::read_failure(path, &e))
        .and_then(|text| process_source_with_summary(&text, vocabulary))
        .map(|(acc, summary)| {
            debug!(
                path = %path.display(),
                tokens = summary.tokens,
                groups = summary.groups,
                keyword_leaves = summary.keyword_leaves,
                ignored_atoms = summary.ignored_atoms,
                max_depth = summary.max_depth,
                paths = acc.len(),
                "processed file"
            );
            acc
        });

    FileOutcome {
        path: path.to_path_buf(),
        result,
    }
}

/// Accumulated state of a whole run
#[derive(Debug, Clone, Default)]
pub struct CorpusRun {
    /// Counts from every successfully processed file
    pub accumulator: Accumulator,
    /// Number of files merged into `accumulator`
    pub processed: usize,
    /// Files that were rejected, in input order
    pub failures: Vec<(PathBuf, Error)>,
}

impl CorpusRun {
    /// Creates an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a successful outcome or record a failure
    pub fn absorb(&mut self, outcome: FileOutcome) {
        match outcome.result {
            Ok(acc) => {
                self.accumulator.merge(acc);
                self.processed += 1;
            }
            Err(err) => {
                debug!(path = %outcome.path.display(), error = %err, "failed to process file");
                self.failures.push((outcome.path, err));
            }
        }
    }

    /// True if any input file was rejected
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub(crate) fn log_finished(&self) {
        info!(
            processed = self.processed,
            failed = self.failures.len(),
            paths = self.accumulator.len(),
            "corpus run finished"
        );
    }
}

/// Process `paths` one after another in the given order
pub fn process_files<P: AsRef<Path>>(paths: &[P], vocabulary: &Vocabulary) -> CorpusRun {
    let mut run = CorpusRun::new();
    for path in paths {
        run.absorb(process_file(path.as_ref(), vocabulary));
    }
    run.log_finished();
    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_process_source() {
        let acc = process_source("(pcb (structure (layer top)))", Vocabulary::builtin()).unwrap();
        assert_eq!(acc.get("pcb.structure.layer.top"), 1);
    }

    #[test]
    fn test_absorb_failure_leaves_accumulator_untouched() {
        let mut run = CorpusRun::new();
        run.absorb(FileOutcome {
            path: PathBuf::from("good.dsn"),
            result: process_source("(pcb (net a))", Vocabulary::builtin()),
        });
        run.absorb(FileOutcome {
            path: PathBuf::from("bad.dsn"),
            result: process_source("(pcb (net a) (net", Vocabulary::builtin()),
        });

        assert_eq!(run.processed, 1);
        assert_eq!(run.accumulator.get("pcb.net"), 1);
        assert_eq!(run.failures.len(), 1);
        assert_eq!(run.failures[0].0, PathBuf::from("bad.dsn"));
        assert_eq!(run.failures[0].1.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_missing_file_is_read_failure() {
        let outcome = process_file(Path::new("/nonexistent/board.dsn"), Vocabulary::builtin());
        let err = outcome.result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReadFailure);
    }

    #[test]
    fn test_no_files_is_empty_run() {
        let paths: [&str; 0] = [];
        let run = process_files(&paths, Vocabulary::builtin());
        assert!(run.accumulator.is_empty());
        assert_eq!(run.processed, 0);
        assert!(!run.has_failures());
    }
}
