//! Grouping, counting and ranking helpers

use std::collections::HashMap;
use std::hash::Hash;

/// Count rows per key
///
/// Rows whose key is missing are not counted. The returned groups come in
/// no particular order; callers rank them.
pub fn count_by<T, K, I, F>(rows: I, key: F) -> Vec<(K, u64)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut counts: HashMap<K, u64> = HashMap::new();
    for row in rows {
        if let Some(k) = key(&row) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// Keep at most `limit` rows
pub fn take_top<T>(mut rows: Vec<T>, limit: usize) -> Vec<T> {
    rows.truncate(limit);
    rows
}

/// Keep the first row for every key, dropping later duplicates
pub fn dedup_first<T, K, F>(rows: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = std::collections::HashSet::new();
    rows.into_iter().filter(|row| seen.insert(key(row))).collect()
}
