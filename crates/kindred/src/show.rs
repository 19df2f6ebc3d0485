//! The `kin show` command.

use anyhow::Result;

use kindred_core::ItemRecord;

use crate::catalog;
use crate::config::Config;

/// Resolve a title and print the full record plus its composed document.
pub fn run_show(config: &Config, query: &str) -> Result<()> {
    let index = catalog::build_index(config)?;

    let resolved = match index.resolve(query) {
        Ok(candidate) => candidate,
        Err(_) => {
            println!("No close match for \"{}\".", query);
            return Ok(());
        }
    };

    let record = index.record(resolved.index);
    println!("Title:    {}", record.title);
    println!("Index:    {}", resolved.index);
    println!("Match:    {:.2}", resolved.score);
    for name in ItemRecord::ATTRIBUTES {
        let value = record.attribute(name).unwrap_or("");
        println!("{:<9} {}", format!("{}:", capitalize(name)), value);
    }
    println!();
    println!("Composed document:");
    println!("  \"{}\"", index.document(resolved.index));

    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
