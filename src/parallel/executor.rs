//! Parallel corpus processing
//!
//! Uses Rayon to lex and walk files concurrently. Every worker produces its
//! own [`FileOutcome`]; outcomes are merged on the calling thread in input
//! order, so the result is identical to a sequential run.

use std::path::Path;

use rayon::prelude::*;

use crate::corpus::{process_file, process_files, CorpusRun, FileOutcome};
use crate::error::{Error, Result};
use crate::vocabulary::Vocabulary;

/// Configuration for parallel execution
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

impl ParallelConfig {
    /// Configuration with an explicit worker count
    pub fn with_jobs(jobs: usize) -> Self {
        Self {
            max_parallelism: jobs,
        }
    }
}

/// Process `paths` on a thread pool and merge the per-file results
///
/// # Returns
/// * `Ok(CorpusRun)` - merged counts plus per-file failures
/// * `Err(Error::ThreadPool)` - the pool could not be created
pub fn process_files_parallel<P>(
    paths: &[P],
    vocabulary: &Vocabulary,
    config: &ParallelConfig,
) -> Result<CorpusRun>
where
    P: AsRef<Path> + Sync,
{
    // Nothing to share between workers
    if config.max_parallelism <= 1 || paths.len() < 2 {
        return Ok(process_files(paths, vocabulary));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.max_parallelism.min(paths.len()))
        .build()
        .map_err(|e| Error::ThreadPool(format!("Failed to create thread pool: {}", e)))?;

    let outcomes: Vec<FileOutcome> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| process_file(path.as_ref(), vocabulary))
            .collect()
    });

    let mut run = CorpusRun::new();
    for outcome in outcomes {
        run.absorb(outcome);
    }
    run.log_finished();
    Ok(run)
}
