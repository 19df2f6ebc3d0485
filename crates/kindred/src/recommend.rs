//! The `kin recommend` command.

use anyhow::Result;

use kindred_core::Outcome;

use crate::catalog;
use crate::config::Config;

/// Resolve the query and print the ranked recommendations.
///
/// A query that no title matches is an expected outcome: it prints a
/// friendly message and exits zero. With `--json` the structured
/// [`Outcome`] is emitted unchanged.
pub fn run_recommend(config: &Config, query: &str, top_k: Option<usize>, json: bool) -> Result<()> {
    let index = catalog::build_index(config)?;
    let k = top_k.unwrap_or(config.retrieval.top_k);
    let outcome = index.recommend(query, k);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        Outcome::NoMatch { query } => {
            println!("No close match for \"{}\".", query);
        }
        Outcome::Recommended { resolved, items } => {
            println!("Recommendations based on \"{}\":", resolved.title);
            println!();
            for (i, item) in items.iter().enumerate() {
                println!("{}. [{:.2}] {}", i + 1, item.score, item.record.title);
                print_attribute("tags", &item.record.tags);
                print_attribute("credits", &item.record.credits);
                print_attribute("creator", &item.record.creator);
                println!();
            }
        }
    }

    Ok(())
}

fn print_attribute(label: &str, value: &str) {
    if !value.is_empty() {
        println!("    {}: {}", label, value);
    }
}
