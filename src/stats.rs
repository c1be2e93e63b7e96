//! Path occurrence counts
//!
//! An [`Accumulator`] maps a dot-joined keyword path such as
//! `pcb.structure.layer` to the number of times that path was visited.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

/// Mapping from dot-joined path to occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Accumulator {
    counts: HashMap<String, u64>,
}

impl Accumulator {
    /// Creates an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one visit of `path`
    pub fn record(&mut self, path: &str) {
        // Only allocate the key on first visit
        if let Some(count) = self.counts.get_mut(path) {
            *count += 1;
        } else {
            self.counts.insert(path.to_string(), 1);
        }
    }

    /// Count recorded for `path`, zero if never visited
    pub fn get(&self, path: &str) -> u64 {
        self.counts.get(path).copied().unwrap_or(0)
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Add every count of `other` into `self`
    pub fn merge(&mut self, other: Accumulator) {
        for (path, count) in other.counts {
            match self.counts.entry(path) {
                Entry::Occupied(mut e) => *e.get_mut() += count,
                Entry::Vacant(e) => {
                    e.insert(count);
                }
            }
        }
    }

    /// Iterate over `(path, count)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(path, count)| (path.as_str(), *count))
    }

    /// Entries ordered ascending by count, then by path
    pub fn sorted(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(path, count)| (path.clone(), *count))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}

impl<'a> FromIterator<(&'a str, u64)> for Accumulator {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        for (path, count) in iter {
            *acc.counts.entry(path.to_string()).or_insert(0) += count;
        }
        acc
    }
}
