//! The immutable recommender index and its query surface.
//!
//! [`RecommenderIndex::build`] runs the whole pipeline — compose,
//! vectorize, similarity — over one catalog snapshot and bundles the
//! results with an exact title lookup and a configured fuzzy matcher.
//! There is no state machine beyond "unbuilt → built": once built, the
//! index only answers read-only queries, so concurrent callers need no
//! locking. A catalog change means building a brand-new index and
//! publishing it through [`SharedIndex::replace`]; nothing is ever
//! mutated in place.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::compose::compose_corpus;
use crate::error::{BuildError, MatchError};
use crate::matcher::{TitleCandidate, TitleMatcher, DEFAULT_CUTOFF, DEFAULT_MAX_CANDIDATES};
use crate::models::ItemRecord;
use crate::rank;
use crate::similarity::SimilarityMatrix;
use crate::vectorize::TfidfModel;

/// Default number of recommendations returned per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Build-time knobs for a [`RecommenderIndex`].
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Attribute fields composed into each document, in order.
    pub features: Vec<String>,
    /// Minimum fuzzy-match ratio for title resolution.
    pub cutoff: f64,
    /// Cap on retained fuzzy-match candidates.
    pub max_candidates: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            features: ItemRecord::ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
            cutoff: DEFAULT_CUTOFF,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// One recommended item, joined back to its catalog record.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Position of the item in the catalog.
    pub index: usize,
    /// The full catalog record, for display.
    pub record: ItemRecord,
    /// Cosine similarity against the resolved item.
    pub score: f64,
}

/// Structured result of a recommendation query.
///
/// A failed resolution is an expected outcome, not an error: the caller
/// renders it as an empty/negative state.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The query resolved and produced a ranked list (≤ K entries).
    Recommended {
        /// The catalog title the query resolved to.
        resolved: TitleCandidate,
        /// Ranked recommendations, scores non-increasing.
        items: Vec<Recommendation>,
    },
    /// No catalog title cleared the matcher cutoff.
    NoMatch {
        /// The query string that failed to resolve.
        query: String,
    },
}

/// An immutable bundle of everything needed to answer queries over one
/// catalog snapshot.
pub struct RecommenderIndex {
    records: Vec<ItemRecord>,
    corpus: Vec<String>,
    model: TfidfModel,
    matrix: SimilarityMatrix,
    title_lookup: HashMap<String, usize>,
    matcher: TitleMatcher,
    options: IndexOptions,
}

// Not derivable: the matcher holds a boxed scorer.
impl fmt::Debug for RecommenderIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecommenderIndex")
            .field("len", &self.len())
            .field("vocabulary_len", &self.vocabulary_len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RecommenderIndex {
    /// Build an index from a catalog snapshot.
    ///
    /// Runs compose → vectorize → similarity once, synchronously.
    /// Fails with [`BuildError::EmptyCatalog`] for zero records.
    pub fn build(records: Vec<ItemRecord>, options: IndexOptions) -> Result<Self, BuildError> {
        if records.is_empty() {
            return Err(BuildError::EmptyCatalog);
        }

        let corpus = compose_corpus(&records, &options.features);
        let model = TfidfModel::fit(&corpus);
        let matrix = SimilarityMatrix::from_vectors(model.vectors());

        // First occurrence wins for duplicate titles, consistent with
        // the earliest-index-wins tie-break everywhere else.
        let mut title_lookup: HashMap<String, usize> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            title_lookup.entry(record.title.clone()).or_insert(index);
        }

        let matcher = TitleMatcher::new(options.cutoff, options.max_candidates);

        Ok(RecommenderIndex {
            records,
            corpus,
            model,
            matrix,
            title_lookup,
            matcher,
            options,
        })
    }

    /// Resolve a query to a catalog title: O(1) exact lookup first, the
    /// fuzzy matcher as fallback.
    pub fn resolve(&self, query: &str) -> Result<TitleCandidate, MatchError> {
        if let Some(&index) = self.title_lookup.get(query) {
            return Ok(TitleCandidate {
                index,
                title: query.to_string(),
                score: 1.0,
            });
        }
        let titles: Vec<&str> = self.records.iter().map(|r| r.title.as_str()).collect();
        self.matcher.resolve(query, &titles)
    }

    /// Fuzzy-match candidates for a query, for diagnostics.
    pub fn candidates(&self, query: &str) -> Vec<TitleCandidate> {
        let titles: Vec<&str> = self.records.iter().map(|r| r.title.as_str()).collect();
        self.matcher.candidates(query, &titles)
    }

    /// Resolve the query and return the top-`k` most similar other items.
    pub fn recommend(&self, query: &str, k: usize) -> Outcome {
        let resolved = match self.resolve(query) {
            Ok(candidate) => candidate,
            Err(MatchError::NoMatchFound { query }) => return Outcome::NoMatch { query },
        };

        let items = rank::top_k(self.matrix.row(resolved.index), resolved.index, k)
            .into_iter()
            .map(|scored| Recommendation {
                index: scored.index,
                record: self.records[scored.index].clone(),
                score: scored.score,
            })
            .collect();

        Outcome::Recommended { resolved, items }
    }

    /// Number of items in the catalog snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the index holds no items (never observed in practice,
    /// since [`Self::build`] rejects empty catalogs).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The catalog snapshot this index was built from.
    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    /// All catalog titles, in catalog order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// The record at catalog position `i`.
    ///
    /// Panics if `i >= self.len()`; positions come from this index's own
    /// resolution and ranking results, which are always in range.
    pub fn record(&self, i: usize) -> &ItemRecord {
        &self.records[i]
    }

    /// The composed document for catalog position `i`.
    ///
    /// Panics if `i >= self.len()`.
    pub fn document(&self, i: usize) -> &str {
        &self.corpus[i]
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.model.vocabulary().len()
    }

    /// Similarity between catalog positions `i` and `j`.
    ///
    /// Panics if either position is `>= self.len()`.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    /// The options this index was built with.
    pub fn options(&self) -> &IndexOptions {
        &self.options
    }
}

/// Atomic publication point for long-lived embedders.
///
/// Readers grab a cheap [`Arc`] clone of the current index; a rebuild
/// constructs the replacement off to the side and swaps the pointer, so
/// concurrent readers never observe a partially built matrix.
pub struct SharedIndex {
    current: RwLock<Arc<RecommenderIndex>>,
}

impl SharedIndex {
    /// Wrap a freshly built index.
    pub fn new(index: RecommenderIndex) -> SharedIndex {
        SharedIndex {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The currently published index.
    pub fn current(&self) -> Arc<RecommenderIndex> {
        // The lock only guards a pointer swap; a poisoned guard still
        // holds a fully built index.
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically publish a fully built replacement.
    pub fn replace(&self, index: RecommenderIndex) {
        let next = Arc::new(index);
        match self.current.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
    }
}
