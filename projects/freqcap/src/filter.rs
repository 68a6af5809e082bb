use super::counts::{within_threshold, Frequencies};
use std::collections::HashSet;
use std::hash::Hash;

/// Keep the values of `data` that occur at most `n` times.
///
/// Each kept value appears exactly once, at the position of its first occurrence. The result is
/// empty for empty input and for any negative `n`.
pub fn filter_by_threshold<T: Eq + Hash + Clone>(data: &[T], n: i64) -> Vec<T> {
    let frequencies = Frequencies::from_values(data);
    let mut emitted = HashSet::with_capacity(frequencies.len());

    data.iter()
        .filter(|value| within_threshold(frequencies.count(value), n) && emitted.insert(*value))
        .cloned()
        .collect()
}

/// In-place version of [`filter_by_threshold`] that returns the number of removed elements.
pub fn retain_by_threshold<T: Eq + Hash + Clone>(values: &mut Vec<T>, n: i64) -> usize {
    let kept = filter_by_threshold(values, n);
    let removed_count = values.len() - kept.len();

    *values = kept;

    removed_count
}
