//! The `kin titles` command.

use anyhow::Result;

use crate::catalog;
use crate::config::Config;

/// List all catalog titles with their ordinal indices.
pub fn run_titles(config: &Config) -> Result<()> {
    let index = catalog::build_index(config)?;

    for (i, title) in index.titles().iter().enumerate() {
        println!("{:>5}  {}", i, title);
    }

    Ok(())
}
