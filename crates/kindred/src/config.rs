use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use kindred_core::index::DEFAULT_TOP_K;
use kindred_core::matcher::{DEFAULT_CUTOFF, DEFAULT_MAX_CANDIDATES};
use kindred_core::{IndexOptions, ItemRecord};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
    #[serde(default = "default_features")]
    pub features: Vec<String>,
}

fn default_features() -> Vec<String> {
    ItemRecord::ATTRIBUTES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatcherConfig {
    #[serde(default = "default_cutoff")]
    pub cutoff: f64,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            cutoff: DEFAULT_CUTOFF,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF
}
fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        RetrievalConfig {
            top_k: DEFAULT_TOP_K,
        }
    }
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl Config {
    /// A default configuration pointing at the given catalog file.
    ///
    /// Used by the `--catalog` CLI flag when no config file is present.
    pub fn for_catalog(path: &Path) -> Config {
        Config {
            catalog: CatalogConfig {
                path: path.to_path_buf(),
                features: default_features(),
            },
            matcher: MatcherConfig::default(),
            retrieval: RetrievalConfig::default(),
        }
    }

    /// Build-time options for the core index, from this configuration.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            features: self.catalog.features.clone(),
            cutoff: self.matcher.cutoff,
            max_candidates: self.matcher.max_candidates,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.catalog.features.is_empty() {
        anyhow::bail!("catalog.features must name at least one attribute field");
    }

    for feature in &config.catalog.features {
        if !ItemRecord::ATTRIBUTES.contains(&feature.as_str()) {
            anyhow::bail!(
                "Unknown feature '{}' in catalog.features. Known attributes: {}.",
                feature,
                ItemRecord::ATTRIBUTES.join(", ")
            );
        }
    }

    if !(0.0..=1.0).contains(&config.matcher.cutoff) {
        anyhow::bail!("matcher.cutoff must be in [0.0, 1.0]");
    }

    if config.matcher.max_candidates < 1 {
        anyhow::bail!("matcher.max_candidates must be >= 1");
    }

    if config.retrieval.top_k < 1 {
        anyhow::bail!("retrieval.top_k must be >= 1");
    }

    Ok(())
}
