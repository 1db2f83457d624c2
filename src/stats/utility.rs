use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value in `values`. Ties are broken by first occurrence in
/// input order. Returns `None` for empty input.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(value, _)| value)
}

/// Distinct values with occurrence counts, ordered by descending count.
/// Equal counts keep first-occurrence order.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }

    let mut ordered: Vec<_> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.0.cmp(&a.1.0).then(a.1.1.cmp(&b.1.1)));

    ordered
        .into_iter()
        .map(|(value, (count, _))| (value, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strict_majority() {
        let values = vec!["b", "a", "b", "c", "b"];
        assert_eq!(mode(values), Some("b"));
    }

    #[test]
    fn test_mode_tie_breaks_on_first_occurrence() {
        let values = vec!["x", "y", "y", "x"];
        assert_eq!(mode(values), Some("x"));

        let values = vec![7, 3, 3, 7];
        assert_eq!(mode(values), Some(7));
    }

    #[test]
    fn test_mode_empty_input() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_single_value() {
        assert_eq!(mode(vec![42]), Some(42));
    }

    #[test]
    fn test_value_counts_descending() {
        let values = vec!["a", "b", "a", "c", "a", "b"];
        assert_eq!(
            value_counts(values),
            vec![("a", 3), ("b", 2), ("c", 1)]
        );
    }

    #[test]
    fn test_value_counts_ties_keep_input_order() {
        let values = vec!["late", "early", "early", "late"];
        assert_eq!(value_counts(values), vec![("late", 2), ("early", 2)]);
    }

    #[test]
    fn test_value_counts_empty() {
        assert!(value_counts(Vec::<&str>::new()).is_empty());
    }
}
