//! TF-IDF vectorization.
//!
//! Fits a vocabulary over the whole corpus in one batch (no incremental
//! fitting) and produces one L2-normalized sparse vector per document.
//!
//! # Weighting
//!
//! For term `t` in document `d`:
//!
//! ```text
//! weight(t, d) = tf(t, d) × idf(t)
//! idf(t)       = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! where `tf` is the raw term count, `N` the corpus size, and `df(t)` the
//! number of documents containing `t`. The smoothed, log-scaled IDF never
//! reaches zero, so terms present in every document still contribute.
//!
//! Determinism: term IDs are assigned in lexicographic term order and
//! sparse entries are emitted in ascending term-ID order, so refitting an
//! identical corpus yields bitwise-identical vectors.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Minimum token length; single characters carry no signal.
const MIN_TOKEN_LEN: usize = 2;

/// A sparse, L2-normalized weight vector over the shared vocabulary.
///
/// Entries are `(term_id, weight)` pairs sorted by ascending `term_id`.
/// A document that produced no tokens yields an empty (zero) vector.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    entries: Vec<(u32, f64)>,
}

impl TermVector {
    /// The sparse `(term_id, weight)` entries, ascending by term ID.
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// True when this is the zero vector (document produced no tokens).
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sparse dot product via merge-join over the sorted entries.
    ///
    /// For two normalized vectors this is exactly their cosine similarity.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// A fitted TF-IDF model: the sorted vocabulary plus one normalized
/// vector per input document, index-aligned with the corpus.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: Vec<String>,
    vectors: Vec<TermVector>,
}

impl TfidfModel {
    /// Fit vocabulary and per-document vectors over the full corpus.
    pub fn fit(corpus: &[String]) -> TfidfModel {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|doc| tokenize(doc)).collect();

        // Lexicographic term order fixes the term-ID assignment.
        let vocabulary: Vec<String> = {
            let mut terms: Vec<String> = tokenized
                .iter()
                .flatten()
                .cloned()
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            terms.sort();
            terms
        };

        let term_ids: HashMap<&str, u32> = vocabulary
            .iter()
            .enumerate()
            .map(|(id, term)| (term.as_str(), id as u32))
            .collect();

        // Document frequency per term.
        let mut df = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let distinct: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in distinct {
                df[term_ids[term] as usize] += 1;
            }
        }

        let n = corpus.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                // BTreeMap keeps accumulation and output in term-ID order.
                let mut counts: BTreeMap<u32, f64> = BTreeMap::new();
                for token in tokens {
                    *counts.entry(term_ids[token.as_str()]).or_insert(0.0) += 1.0;
                }

                let mut entries: Vec<(u32, f64)> = counts
                    .into_iter()
                    .map(|(id, tf)| (id, tf * idf[id as usize]))
                    .collect();

                let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut entries {
                        *w /= norm;
                    }
                }

                TermVector { entries }
            })
            .collect();

        TfidfModel {
            vocabulary,
            vectors,
        }
    }

    /// The distinct terms observed across the corpus, lexicographically
    /// sorted. Term IDs are indices into this list.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// The per-document vectors, index-aligned with the input corpus.
    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }
}

/// Lowercase and split into maximal runs of word characters (alphanumeric
/// or `_`), keeping only tokens of at least [`MIN_TOKEN_LEN`] characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        let tokens = tokenize("Space Exploration, Nolan-style direction");
        assert_eq!(
            tokens,
            vec!["space", "exploration", "nolan", "style", "direction"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = tokenize("a b ab");
        assert_eq!(tokens, vec!["ab"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  , - .").is_empty());
    }

    #[test]
    fn test_vectors_are_unit_norm() {
        let model = TfidfModel::fit(&corpus(&["space drama", "space action", "car chase"]));
        for vec in model.vectors() {
            let norm: f64 = vec.entries().iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "norm was {}", norm);
        }
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let model = TfidfModel::fit(&corpus(&["space drama", ""]));
        assert!(!model.vectors()[0].is_zero());
        assert!(model.vectors()[1].is_zero());
    }

    #[test]
    fn test_idf_weights_rare_terms_higher() {
        // "space" appears in both documents, "drama" in one. Within
        // document 0 the raw tf is 1 for each, so the rarer term must
        // carry the larger normalized weight.
        let model = TfidfModel::fit(&corpus(&["space drama", "space action"]));
        let vocab = model.vocabulary();
        let space_id = vocab.iter().position(|t| t == "space").unwrap() as u32;
        let drama_id = vocab.iter().position(|t| t == "drama").unwrap() as u32;

        let entries = model.vectors()[0].entries();
        let weight = |id: u32| entries.iter().find(|(t, _)| *t == id).unwrap().1;
        assert!(weight(drama_id) > weight(space_id));
    }

    #[test]
    fn test_fit_is_deterministic() {
        let docs = corpus(&["space drama nolan", "car chase action", "space action"]);
        let a = TfidfModel::fit(&docs);
        let b = TfidfModel::fit(&docs);
        assert_eq!(a.vocabulary(), b.vocabulary());
        assert_eq!(a.vectors(), b.vectors());
    }

    #[test]
    fn test_dot_identical_vectors_is_one() {
        let model = TfidfModel::fit(&corpus(&["space drama", "car chase"]));
        let v = &model.vectors()[0];
        assert!((v.dot(v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dot_disjoint_vectors_is_zero() {
        let model = TfidfModel::fit(&corpus(&["space drama", "car chase"]));
        let dot = model.vectors()[0].dot(&model.vectors()[1]);
        assert!(dot.abs() < 1e-9);
    }

    #[test]
    fn test_vocabulary_is_sorted() {
        let model = TfidfModel::fit(&corpus(&["zebra apple", "mango apple"]));
        let vocab = model.vocabulary();
        let mut sorted = vocab.to_vec();
        sorted.sort();
        assert_eq!(vocab, sorted.as_slice());
    }
}
