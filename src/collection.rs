//! Compiling interval observations into per-pair statistics.

use std::collections::HashMap;

use crate::label::Label;
use crate::stats::{compute_stdev, Stats};

/// One measured interval between two consecutive checkpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation<L> {
    pub from: L,
    pub to: L,
    /// Duration in seconds.
    pub duration: f64,
}

impl<L> Observation<L> {
    pub fn new(from: L, to: L, duration: f64) -> Self {
        Self { from, to, duration }
    }
}

pub type PairKey<L> = (L, L);

/// Per-`(from, to)` statistics, iterated in first-seen order.
#[derive(Debug, Clone)]
pub struct TimeStampCollection<L: Label> {
    entries: Vec<(PairKey<L>, Stats)>,
    index: HashMap<PairKey<L>, usize>,
}

impl<L: Label> Default for TimeStampCollection<L> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<L: Label> TimeStampCollection<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, from: &L, to: &L) -> Option<&Stats> {
        let key = (from.clone(), to.clone());
        self.index.get(&key).map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey<L>, &Stats)> {
        self.entries.iter().map(|(key, stats)| (key, stats))
    }

    pub fn keys(&self) -> impl Iterator<Item = &PairKey<L>> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Total of every pair's summed duration.
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|(_, stats)| stats.sum).sum()
    }

    /// Total observation count across all pairs.
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|(_, stats)| stats.count).sum()
    }

    /// Returns the stats slot for `key`, appending an empty one if unseen.
    pub(crate) fn entry_mut(&mut self, key: &PairKey<L>) -> &mut Stats {
        let position = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((key.clone(), Stats::default()));
                self.index.insert(key.clone(), i);
                i
            }
        };
        &mut self.entries[position].1
    }
}

/// Per-key raw values kept in first-seen order, aligned with a collection.
struct Samples<L: Label> {
    values: Vec<Vec<f64>>,
    index: HashMap<PairKey<L>, usize>,
}

impl<L: Label> Samples<L> {
    fn new() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, key: &PairKey<L>, value: f64) {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.values.push(Vec::new());
                self.index.insert(key.clone(), self.values.len() - 1);
                self.values.len() - 1
            }
        };
        self.values[i].push(value);
    }

    fn get(&self, key: &PairKey<L>) -> &[f64] {
        self.index
            .get(key)
            .map(|&i| self.values[i].as_slice())
            .unwrap_or(&[])
    }
}

/// Compiles a sequence of observations into per-pair statistics.
///
/// The first pass folds min, max and sum per pair while keeping the raw
/// durations; the second pass sets count, mean and sample standard deviation.
/// Labels may show up on both sides of many pairs, so the sequence is treated
/// as a general multigraph of transitions.
///
/// ```
/// # use sxs_toolbox::collection::{compile, Observation};
/// let observations = vec![
///     Observation::new("A", "B", 1.0),
///     Observation::new("B", "A", 0.5),
///     Observation::new("A", "B", 3.0),
/// ];
/// let collection = compile(&observations);
/// let ab = collection.get(&"A", &"B").unwrap();
/// assert_eq!(ab.count, 2);
/// assert_eq!(ab.mean, 2.0);
/// ```
pub fn compile<'a, L, I>(observations: I) -> TimeStampCollection<L>
where
    L: Label + 'a,
    I: IntoIterator<Item = &'a Observation<L>>,
{
    let mut result = TimeStampCollection::new();
    let mut samples = Samples::new();

    for observation in observations {
        let key = (observation.from.clone(), observation.to.clone());
        result.entry_mut(&key).observe(observation.duration);
        samples.push(&key, observation.duration);
    }

    for (key, stats) in result.entries.iter_mut() {
        let values = samples.get(key);
        stats.count = values.len();
        stats.mean = stats.sum / stats.count as f64;
        stats.stdev = compute_stdev(stats.mean, values);
    }
    result
}

/// Merges several collections, e.g. one per repeated trial.
///
/// Count, sum, min and max combine exactly. The merged mean is `sum / count`,
/// but the merged standard deviation is computed from the per-collection
/// means around it, not from the underlying samples (which are gone by now).
/// This is a known precision trade-off: it measures trial-to-trial spread and
/// is zero when only one collection contributes to a pair. Use
/// [`Stats::accumulate_standard`] when a pooled deviation is wanted.
pub fn merge<'a, L, I>(collections: I) -> TimeStampCollection<L>
where
    L: Label + 'a,
    I: IntoIterator<Item = &'a TimeStampCollection<L>>,
{
    let mut merged = TimeStampCollection::new();
    let mut trial_means = Samples::new();

    for collection in collections {
        for (key, stats) in collection.iter() {
            if stats.is_empty() {
                continue;
            }
            merged.entry_mut(key).accumulate_without_mean_stdev(stats);
            trial_means.push(key, stats.mean);
        }
    }

    for (key, stats) in merged.entries.iter_mut() {
        stats.mean = stats.sum / stats.count as f64;
        stats.stdev = compute_stdev(stats.mean, trial_means.get(key));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_keeps_first_seen_order() {
        let observations = vec![
            Observation::new("B", "C", 1.0),
            Observation::new("A", "B", 1.0),
            Observation::new("B", "C", 2.0),
        ];
        let collection = compile(&observations);
        let keys: Vec<_> = collection.keys().cloned().collect();
        assert_eq!(keys, vec![("B", "C"), ("A", "B")]);
    }

    #[test]
    fn test_merge_of_empty_input() {
        let merged = merge(std::iter::empty::<&TimeStampCollection<&str>>());
        assert!(merged.is_empty());
        assert_eq!(merged.grand_total(), 0.0);
    }
}
