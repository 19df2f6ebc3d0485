//! Index summary and health overview.
//!
//! Gives a quick picture of what the current catalog snapshot builds
//! into: item count, vocabulary size, matrix shape, and the matcher
//! settings in effect. The fingerprint is the SHA-256 of the composed
//! corpus, so two operators can check at a glance that their hosts
//! built the same index from the same snapshot.

use anyhow::Result;
use sha2::{Digest, Sha256};

use crate::catalog;
use crate::config::Config;

/// Run the stats command: build the index and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let index = catalog::build_index(config)?;

    println!("Kindred — Index Stats");
    println!("=====================");
    println!();
    println!("  Catalog:      {}", config.catalog.path.display());
    println!("  Items:        {}", index.len());
    println!("  Vocabulary:   {} terms", index.vocabulary_len());
    println!("  Matrix:       {} x {}", index.len(), index.len());
    println!("  Features:     {}", config.catalog.features.join(", "));
    println!("  Cutoff:       {:.2}", config.matcher.cutoff);
    println!("  Candidates:   {}", config.matcher.max_candidates);
    println!("  Top-K:        {}", config.retrieval.top_k);
    println!("  Fingerprint:  {}", corpus_fingerprint(&index));
    println!();

    Ok(())
}

/// SHA-256 over the composed documents, joined by newlines.
fn corpus_fingerprint(index: &kindred_core::RecommenderIndex) -> String {
    let mut hasher = Sha256::new();
    for i in 0..index.len() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(index.document(i).as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_core::{IndexOptions, ItemRecord, RecommenderIndex};

    fn record(title: &str, tags: &str) -> ItemRecord {
        ItemRecord {
            title: title.to_string(),
            tags: tags.to_string(),
            keywords: String::new(),
            tagline: String::new(),
            credits: String::new(),
            creator: String::new(),
        }
    }

    #[test]
    fn test_fingerprint_stable_across_rebuilds() {
        let records = vec![record("A", "space"), record("B", "car chase")];
        let a = RecommenderIndex::build(records.clone(), IndexOptions::default()).unwrap();
        let b = RecommenderIndex::build(records, IndexOptions::default()).unwrap();
        assert_eq!(corpus_fingerprint(&a), corpus_fingerprint(&b));
    }

    #[test]
    fn test_fingerprint_changes_with_catalog() {
        let a = RecommenderIndex::build(
            vec![record("A", "space")],
            IndexOptions::default(),
        )
        .unwrap();
        let b = RecommenderIndex::build(
            vec![record("A", "space drama")],
            IndexOptions::default(),
        )
        .unwrap();
        assert_ne!(corpus_fingerprint(&a), corpus_fingerprint(&b));
    }
}
