//! Parallel execution support
//!
//! Processes independent files concurrently and reduces their counts.

mod executor;

pub use executor::{process_files_parallel, ParallelConfig};
