//! # Kindred Core
//!
//! The retrieval pipeline behind Kindred: catalog data models, feature
//! composition, TF-IDF vectorization, pairwise cosine similarity, fuzzy
//! title resolution, and ranked top-K selection.
//!
//! This crate contains no filesystem I/O, no configuration parsing, and
//! no CLI concerns — only data types and deterministic computation. The
//! calling application loads the catalog, builds a [`RecommenderIndex`],
//! and passes query strings in.
//!
//! # Pipeline
//!
//! 1. [`compose`] joins each record's text attributes into one document.
//! 2. [`vectorize`] fits a TF-IDF model over the corpus and produces one
//!    L2-normalized sparse vector per document.
//! 3. [`similarity`] precomputes the full N×N cosine-similarity matrix.
//! 4. At query time, [`matcher`] resolves a free-text query to the
//!    closest catalog title and [`rank`] returns the top-K most similar
//!    other items from the resolved row.
//!
//! [`RecommenderIndex`]: index::RecommenderIndex

pub mod compose;
pub mod error;
pub mod index;
pub mod matcher;
pub mod models;
pub mod rank;
pub mod similarity;
pub mod vectorize;

pub use error::{BuildError, MatchError};
pub use index::{IndexOptions, Outcome, Recommendation, RecommenderIndex, SharedIndex};
pub use matcher::{SimilarityScorer, SubsequenceRatio, TitleCandidate, TitleMatcher};
pub use models::ItemRecord;
