//! Typed errors for index construction and title resolution.
//!
//! Build-time failures are fatal — a process that cannot build an index
//! serves no queries. Query-time failures are expected outcomes that the
//! caller converts into a structured negative result.

use thiserror::Error;

/// Fatal errors raised while building a [`RecommenderIndex`].
///
/// [`RecommenderIndex`]: crate::index::RecommenderIndex
#[derive(Debug, Error)]
pub enum BuildError {
    /// The catalog snapshot contained zero records.
    #[error("cannot build a recommender index from an empty catalog")]
    EmptyCatalog,
}

/// Recoverable errors raised while resolving a query string to a title.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    /// No catalog title scored at or above the matcher cutoff.
    #[error("no catalog title is close enough to \"{query}\"")]
    NoMatchFound {
        /// The query string that failed to resolve.
        query: String,
    },
}
