//! Top-K selection over a similarity row.

use serde::Serialize;

/// One ranked entry: a catalog index and its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    /// Position of the item in the catalog.
    pub index: usize,
    /// Cosine similarity against the resolved item, in `[0.0, 1.0]`.
    pub score: f64,
}

/// Return the `k` highest-scoring items from a similarity row.
///
/// The item at `self_index` is always excluded — its maximal self-score
/// would otherwise dominate every ranking. Sorting is descending by
/// score with ties broken by ascending original index, so results are
/// deterministic, never arbitrary.
pub fn top_k(row: &[f64], self_index: usize, k: usize) -> Vec<ScoredItem> {
    let mut scored: Vec<ScoredItem> = row
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != self_index)
        .map(|(index, &score)| ScoredItem { index, score })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    scored.truncate(k);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_self() {
        let row = [1.0, 0.4, 0.8];
        let result = top_k(&row, 0, 5);
        assert!(result.iter().all(|item| item.index != 0));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_sorted_descending() {
        let row = [1.0, 0.4, 0.8, 0.6];
        let result = top_k(&row, 0, 5);
        let indices: Vec<usize> = result.iter().map(|item| item.index).collect();
        assert_eq!(indices, vec![2, 3, 1]);
        for pair in result.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_truncates_to_k() {
        let row = [1.0, 0.1, 0.2, 0.3, 0.4, 0.5];
        let result = top_k(&row, 0, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].index, 5);
        assert_eq!(result[1].index, 4);
    }

    #[test]
    fn test_ties_break_by_ascending_index() {
        let row = [1.0, 0.5, 0.5, 0.5];
        let result = top_k(&row, 0, 3);
        let indices: Vec<usize> = result.iter().map(|item| item.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_k_larger_than_catalog() {
        let row = [1.0, 0.2];
        let result = top_k(&row, 0, 10);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_single_item_row() {
        let row = [1.0];
        assert!(top_k(&row, 0, 5).is_empty());
    }
}
