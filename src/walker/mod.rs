//! Path walking
//!
//! Turns a token stream into path occurrence counts using an explicit
//! path stack.

mod path;
mod path_walker;

pub use path::PathStack;
pub use path_walker::{PathWalker, WalkSummary};
