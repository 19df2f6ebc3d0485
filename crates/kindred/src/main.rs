//! # Kindred CLI (`kin`)
//!
//! The `kin` binary is the front end for Kindred's content-based
//! recommender. Every command loads the catalog snapshot, builds the
//! in-memory index, and answers from it; nothing is persisted between
//! runs.
//!
//! ## Usage
//!
//! ```bash
//! kin --config ./config/kin.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `kin recommend "<title>"` | Resolve the title and print the top-K most similar items |
//! | `kin match "<query>"` | Show which titles the fuzzy matcher would accept for a query |
//! | `kin titles` | List all catalog titles with their indices |
//! | `kin show "<title>"` | Print a resolved record and its composed document |
//! | `kin stats` | Print an index summary and catalog fingerprint |
//!
//! ## Examples
//!
//! ```bash
//! # Top recommendations for an exact title
//! kin recommend "Orbit Dreamer" --config ./config/kin.toml
//!
//! # Misspellings resolve through the fuzzy matcher
//! kin recommend "orbitt dremer" --config ./config/kin.toml
//!
//! # Structured output for another front end
//! kin recommend "Orbit Dreamer" --json --top-k 3
//!
//! # Point at a catalog directly, without a config file
//! kin titles --catalog ./data/catalog.json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kindred::config::{self, Config};
use kindred::{matches, recommend, show, stats, titles};

/// Kindred CLI — a content-based catalog recommender.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/kin.example.toml` for a full example. Alternatively,
/// `--catalog` points straight at a catalog JSON file and uses built-in
/// defaults for everything else.
#[derive(Parser)]
#[command(
    name = "kin",
    about = "Kindred — a content-based catalog recommender with fuzzy title resolution",
    version,
    long_about = "Kindred resolves a free-text title query against a catalog of items, \
    compares items by TF-IDF cosine similarity over their text attributes, and returns \
    the top-K most similar entries. The index is rebuilt from the catalog snapshot on \
    every invocation."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/kin.toml`. Catalog location, feature list,
    /// matcher cutoff, and top-K are read from this file.
    #[arg(long, global = true, default_value = "./config/kin.toml")]
    config: PathBuf,

    /// Path to the catalog JSON file.
    ///
    /// Overrides the configured catalog path. When no config file is
    /// present, built-in defaults are used for all other settings.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Print ranked recommendations for a title query.
    ///
    /// Resolves the query against catalog titles (exact match first,
    /// fuzzy fallback) and prints the highest-scoring other items.
    /// An unmatchable query prints a message and exits zero.
    Recommend {
        /// The title to find similar items for. May be misspelled.
        query: String,

        /// Number of recommendations to return (overrides config).
        #[arg(long)]
        top_k: Option<usize>,

        /// Emit the structured response as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show fuzzy-match candidates for a query.
    ///
    /// Prints every catalog title scoring at or above the cutoff with
    /// its similarity ratio. Useful for checking why a query resolves
    /// the way it does.
    Match {
        /// The query string to score against all titles.
        query: String,
    },

    /// List all catalog titles with their ordinal indices.
    Titles,

    /// Print a resolved record and its composed document.
    Show {
        /// The title to look up. May be misspelled.
        query: String,
    },

    /// Print an index summary.
    ///
    /// Item count, vocabulary size, matrix shape, matcher settings, and
    /// a SHA-256 fingerprint of the composed corpus.
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = resolve_config(&cli)?;

    match cli.command {
        Commands::Recommend {
            query,
            top_k,
            json,
        } => recommend::run_recommend(&cfg, &query, top_k, json)?,
        Commands::Match { query } => matches::run_match(&cfg, &query)?,
        Commands::Titles => titles::run_titles(&cfg)?,
        Commands::Show { query } => show::run_show(&cfg, &query)?,
        Commands::Stats => stats::run_stats(&cfg)?,
    }

    Ok(())
}

/// Load the configuration, honoring the `--catalog` shortcut.
///
/// With `--catalog` and no config file, a default configuration pointing
/// at that catalog is used. With both, the flag overrides the configured
/// catalog path.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.catalog {
        Some(path) if !cli.config.exists() => Ok(Config::for_catalog(path)),
        Some(path) => {
            let mut cfg = config::load_config(&cli.config)?;
            cfg.catalog.path = path.clone();
            Ok(cfg)
        }
        None => config::load_config(&cli.config),
    }
}
