//! Aggregate helpers used by the question answerer.
//!
//! All helpers are deterministic: ties are broken by natural ordering of the
//! values, never by hash iteration order.

use std::collections::{BTreeMap, BTreeSet};

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| v as u64).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Count occurrences of each value.
pub fn frequency<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value. Ties go to the smallest value.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    // BTreeMap iterates in ascending order, so a strict `>` keeps the
    // smallest value among equal counts.
    for (value, count) in frequency(values) {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Unique values in ascending order.
pub fn distinct_sorted<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    values.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Group `(key, value)` pairs and return the key with the highest mean value.
///
/// Ties go to the smallest key. `None` when there are no pairs.
pub fn highest_group_mean<K, I>(pairs: I) -> Option<(K, f64)>
where
    K: Ord,
    I: IntoIterator<Item = (K, u32)>,
{
    let mut groups: BTreeMap<K, Vec<u32>> = BTreeMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }

    let mut best: Option<(K, f64)> = None;
    for (key, values) in groups {
        let Some(avg) = mean(&values) else {
            continue;
        };
        match &best {
            Some((_, best_avg)) if avg <= *best_avg => {}
            _ => best = Some((key, avg)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[20, 22, 24]), Some(22.0));
        assert_eq!(mean(&[1, 2]), Some(1.5));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn mean_does_not_overflow() {
        let v = vec![u32::MAX; 4];
        assert_eq!(mean(&v), Some(u32::MAX as f64));
    }

    #[test]
    fn frequency_counts() {
        let f = frequency([70u32, 70, 85]);
        assert_eq!(f.len(), 2);
        assert_eq!(f[&70], 2);
        assert_eq!(f[&85], 1);
    }

    #[test]
    fn mode_picks_most_frequent() {
        assert_eq!(mode(["chess", "reading", "chess"]), Some("chess"));
    }

    #[test]
    fn mode_tie_breaks_lexicographically() {
        assert_eq!(mode(["swimming", "reading", "swimming", "reading"]), Some("reading"));
        assert_eq!(mode(["b", "a"]), Some("a"));
    }

    #[test]
    fn mode_empty() {
        assert_eq!(mode(Vec::<&str>::new()), None);
    }

    #[test]
    fn distinct_sorted_dedupes() {
        assert_eq!(distinct_sorted([24u32, 20, 24, 22]), vec![20, 22, 24]);
    }

    #[test]
    fn highest_group_mean_picks_best_department() {
        let pairs = vec![
            ("Mechanical", 60),
            ("Computer Science", 90),
            ("Mechanical", 80),
            ("Computer Science", 70),
            ("Physics", 85),
        ];
        assert_eq!(highest_group_mean(pairs), Some(("Physics", 85.0)));
    }

    #[test]
    fn highest_group_mean_tie_goes_to_smallest_key() {
        let pairs = vec![("Zoology", 80), ("Art", 80)];
        assert_eq!(highest_group_mean(pairs), Some(("Art", 80.0)));
    }

    #[test]
    fn highest_group_mean_empty() {
        assert_eq!(highest_group_mean(Vec::<(&str, u32)>::new()), None);
    }
}
