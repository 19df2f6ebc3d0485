//! The `kin match` command — a diagnostic view of the fuzzy matcher.

use anyhow::Result;

use crate::catalog;
use crate::config::Config;

/// Print every title candidate that clears the cutoff, with its ratio.
pub fn run_match(config: &Config, query: &str) -> Result<()> {
    let index = catalog::build_index(config)?;
    let candidates = index.candidates(query);

    if candidates.is_empty() {
        println!(
            "No titles at or above cutoff {:.2} for \"{}\".",
            config.matcher.cutoff, query
        );
        return Ok(());
    }

    println!("Candidates for \"{}\":", query);
    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "{}. [{:.2}] {} (index {})",
            i + 1,
            candidate.score,
            candidate.title,
            candidate.index
        );
    }

    Ok(())
}
