//! Catalog loading and index construction.
//!
//! The catalog is a JSON file holding a top-level array of item objects.
//! `title` is required; attribute fields are optional and deserialize to
//! empty strings when absent, so a sparse catalog never produces null
//! markers downstream.

use anyhow::{Context, Result};
use std::path::Path;

use kindred_core::{ItemRecord, RecommenderIndex};

use crate::config::Config;

/// Load the ordered catalog snapshot from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<ItemRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let records: Vec<ItemRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(records)
}

/// Load the catalog and build a fresh [`RecommenderIndex`] from it.
///
/// Every command rebuilds from the current snapshot; there is no
/// persisted index to go stale.
pub fn build_index(config: &Config) -> Result<RecommenderIndex> {
    let records = load_catalog(&config.catalog.path)?;
    let index = RecommenderIndex::build(records, config.index_options())?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_catalog_fills_missing_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(
            &path,
            r#"[
                {"title": "Orbit Dreamer", "tags": "space"},
                {"title": "Street Chase"}
            ]"#,
        )
        .unwrap();

        let records = load_catalog(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tags, "space");
        assert_eq!(records[1].tags, "");
        assert_eq!(records[1].creator, "");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
    }

    #[test]
    fn test_load_catalog_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(&path, "{not json").unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
    }

    #[test]
    fn test_build_index_empty_catalog_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("catalog.json");
        fs::write(&path, "[]").unwrap();

        let config = Config::for_catalog(&path);
        let err = build_index(&config).unwrap_err();
        assert!(err.to_string().contains("empty catalog"));
    }
}
