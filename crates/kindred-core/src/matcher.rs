//! Approximate title resolution.
//!
//! Maps a free-text query (possibly misspelled) onto the closest catalog
//! title. The similarity-ratio function sits behind the
//! [`SimilarityScorer`] trait so alternative matchers (edit distance,
//! phonetic) can be swapped in without touching the ranking logic.
//!
//! The default [`SubsequenceRatio`] scorer uses Ratcliff/Obershelp
//! matching: recursively find the longest contiguous common block, match
//! the regions on either side the same way, and score
//! `2 × matched / (len(a) + len(b))`. This is a matched-character ratio,
//! not an edit distance.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MatchError;

/// Default minimum ratio a title must reach to be considered a match.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Default cap on how many candidates are retained.
pub const DEFAULT_MAX_CANDIDATES: usize = 4;

/// Computes a similarity ratio in `[0.0, 1.0]` between two strings.
pub trait SimilarityScorer: Send + Sync {
    /// Ratio of `1.0` means identical, `0.0` means nothing in common.
    fn ratio(&self, a: &str, b: &str) -> f64;
}

/// Ratcliff/Obershelp matched-character ratio over Unicode characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsequenceRatio;

impl SimilarityScorer for SubsequenceRatio {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * matched_chars(&a, &b) as f64 / total as f64
    }
}

/// Total characters matched by recursive longest-common-block expansion.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matched_chars(&a[..i], &b[..j]) + matched_chars(&a[i + len..], &b[j + len..])
}

/// Find the longest contiguous block common to `a` and `b`.
///
/// Returns `(start_in_a, start_in_b, length)`. Among equal-length blocks
/// the one starting earliest in `a` (then earliest in `b`) wins, which
/// keeps the recursion deterministic.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // j2len[j] = length of the common block ending at a[i] / b[j].
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, &ca) in a.iter().enumerate() {
        let mut next: HashMap<usize, usize> = HashMap::new();
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev).copied())
                    .unwrap_or(0)
                    + 1;
                next.insert(j, len);
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        j2len = next;
    }

    best
}

/// A title that cleared the matcher cutoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleCandidate {
    /// Position of the title in the catalog.
    pub index: usize,
    /// The canonical catalog title.
    pub title: String,
    /// Similarity ratio against the query, in `[0.0, 1.0]`.
    pub score: f64,
}

/// Resolves query strings against an ordered list of catalog titles.
pub struct TitleMatcher {
    cutoff: f64,
    max_candidates: usize,
    scorer: Box<dyn SimilarityScorer>,
}

impl Default for TitleMatcher {
    fn default() -> Self {
        TitleMatcher::new(DEFAULT_CUTOFF, DEFAULT_MAX_CANDIDATES)
    }
}

impl TitleMatcher {
    /// A matcher with the default [`SubsequenceRatio`] scorer.
    pub fn new(cutoff: f64, max_candidates: usize) -> TitleMatcher {
        TitleMatcher::with_scorer(cutoff, max_candidates, Box::new(SubsequenceRatio))
    }

    /// A matcher with a caller-supplied scorer implementation.
    pub fn with_scorer(
        cutoff: f64,
        max_candidates: usize,
        scorer: Box<dyn SimilarityScorer>,
    ) -> TitleMatcher {
        TitleMatcher {
            cutoff,
            max_candidates,
            scorer,
        }
    }

    /// The configured cutoff ratio.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// The configured candidate cap.
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Score every title against the query and return those at or above
    /// the cutoff, sorted by descending ratio (ties broken by ascending
    /// catalog index), capped at `max_candidates`.
    pub fn candidates(&self, query: &str, titles: &[&str]) -> Vec<TitleCandidate> {
        let mut candidates: Vec<TitleCandidate> = titles
            .iter()
            .enumerate()
            .filter_map(|(index, title)| {
                let score = self.scorer.ratio(query, title);
                if score >= self.cutoff {
                    Some(TitleCandidate {
                        index,
                        title: title.to_string(),
                        score,
                    })
                } else {
                    None
                }
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        candidates.truncate(self.max_candidates);
        candidates
    }

    /// Resolve the query to the single best candidate.
    pub fn resolve(&self, query: &str, titles: &[&str]) -> Result<TitleCandidate, MatchError> {
        self.candidates(query, titles)
            .into_iter()
            .next()
            .ok_or_else(|| MatchError::NoMatchFound {
                query: query.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: [&str; 3] = ["Orbit Dreamer", "Orbit Voyager", "Street Chase"];

    #[test]
    fn test_ratio_identical_strings() {
        let scorer = SubsequenceRatio;
        assert!((scorer.ratio("Orbit Dreamer", "Orbit Dreamer") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_both_empty() {
        let scorer = SubsequenceRatio;
        assert!((scorer.ratio("", "") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_one_empty() {
        let scorer = SubsequenceRatio;
        assert_eq!(scorer.ratio("", "Orbit Dreamer"), 0.0);
        assert_eq!(scorer.ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_ratio_disjoint_strings() {
        let scorer = SubsequenceRatio;
        assert_eq!(scorer.ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ratio_counts_matched_blocks() {
        // "abcd" vs "bcde": common block "bcd" (3), nothing on either
        // side, so ratio = 2*3 / 8 = 0.75.
        let scorer = SubsequenceRatio;
        assert!((scorer.ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_resolve_exact_title() {
        let matcher = TitleMatcher::default();
        let resolved = matcher.resolve("Orbit Dreamer", &TITLES).unwrap();
        assert_eq!(resolved.index, 0);
        assert!(resolved.score >= DEFAULT_CUTOFF);
    }

    #[test]
    fn test_resolve_misspelled_title() {
        let matcher = TitleMatcher::default();
        let resolved = matcher.resolve("orbitt dremer", &TITLES).unwrap();
        assert_eq!(resolved.title, "Orbit Dreamer");
        assert!(resolved.score >= DEFAULT_CUTOFF);
    }

    #[test]
    fn test_resolve_nonsense_is_no_match() {
        let matcher = TitleMatcher::default();
        let err = matcher.resolve("zzzzz_no_such_movie", &TITLES).unwrap_err();
        assert_eq!(
            err,
            MatchError::NoMatchFound {
                query: "zzzzz_no_such_movie".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_empty_query_is_no_match() {
        let matcher = TitleMatcher::default();
        assert!(matcher.resolve("", &TITLES).is_err());
    }

    #[test]
    fn test_resolve_empty_catalog_is_no_match() {
        let matcher = TitleMatcher::default();
        assert!(matcher.resolve("Orbit Dreamer", &[]).is_err());
    }

    #[test]
    fn test_candidates_sorted_and_capped() {
        let titles = ["aaaa", "aaab", "aaac", "aaad", "aaae"];
        let matcher = TitleMatcher::default();
        let candidates = matcher.candidates("aaaa", &titles);
        assert_eq!(candidates.len(), DEFAULT_MAX_CANDIDATES);
        assert_eq!(candidates[0].index, 0);
        for pair in candidates.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_candidates_tie_breaks_by_index() {
        // Duplicate titles score identically; earliest index must win.
        let titles = ["Orbit Dreamer", "Orbit Dreamer"];
        let matcher = TitleMatcher::default();
        let candidates = matcher.candidates("Orbit Dreamer", &titles);
        assert_eq!(candidates[0].index, 0);
        assert_eq!(candidates[1].index, 1);
    }

    #[test]
    fn test_swappable_scorer() {
        struct ExactOnly;
        impl SimilarityScorer for ExactOnly {
            fn ratio(&self, a: &str, b: &str) -> f64 {
                if a == b {
                    1.0
                } else {
                    0.0
                }
            }
        }

        let matcher = TitleMatcher::with_scorer(0.6, 4, Box::new(ExactOnly));
        assert!(matcher.resolve("orbitt dremer", &TITLES).is_err());
        assert_eq!(matcher.resolve("Street Chase", &TITLES).unwrap().index, 2);
    }
}
