use indexmap::IndexMap;
use std::hash::Hash;

/// Occurrence counts for the distinct values of a slice.
///
/// Values are borrowed from the counted slice and iterate in the order of their first occurrence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frequencies<'a, T: Eq + Hash> {
    counts: IndexMap<&'a T, usize>,
}

impl<'a, T: Eq + Hash> Frequencies<'a, T> {
    pub fn from_values(values: &'a [T]) -> Self {
        let mut counts = IndexMap::new();

        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// The number of times `value` was seen (zero if never).
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the length of the counted slice).
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a T, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (*value, *count))
    }

    /// Distinct values occurring at most `n` times, in first-occurrence order.
    pub fn within(&self, n: i64) -> impl Iterator<Item = &'a T> + '_ {
        self.iter().filter_map(move |(value, count)| {
            if within_threshold(count, n) {
                Some(value)
            } else {
                None
            }
        })
    }
}

/// Whether an occurrence count satisfies `count <= n`.
///
/// Always false for a negative threshold, since every counted value has been seen at least once.
pub fn within_threshold(count: usize, n: i64) -> bool {
    u64::try_from(n)
        .map(|n| count as u64 <= n)
        .unwrap_or(false)
}
