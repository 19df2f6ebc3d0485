//! Pairwise cosine-similarity matrix.
//!
//! The full N×N matrix is precomputed once per index build from the
//! normalized document vectors. Only the upper triangle is computed and
//! then mirrored; the diagonal is set explicitly so a non-empty document
//! scores exactly `1.0` against itself regardless of floating rounding.
//!
//! Cost is O(N² × D) with D the vocabulary size. Kindred targets
//! small-to-medium, offline-refreshed catalogs, so no approximate
//! nearest-neighbor structure is needed.

use crate::vectorize::TermVector;

/// A symmetric N×N matrix of similarity scores in `[0.0, 1.0]`,
/// stored row-major in one flat allocation. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix from normalized vectors.
    pub fn from_vectors(vectors: &[TermVector]) -> SimilarityMatrix {
        let n = vectors.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            data[i * n + i] = if vectors[i].is_zero() { 0.0 } else { 1.0 };
            for j in (i + 1)..n {
                let score = vectors[i].dot(&vectors[j]);
                data[i * n + j] = score;
                data[j * n + i] = score;
            }
        }

        SimilarityMatrix { n, data }
    }

    /// Number of rows (= number of documents).
    pub fn len(&self) -> usize {
        self.n
    }

    /// True when the matrix holds no documents.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity between documents `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// The full similarity row for document `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
