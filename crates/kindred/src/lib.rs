//! # Kindred
//!
//! Application layer over [`kindred_core`]: TOML configuration, JSON
//! catalog loading, and the command implementations behind the `kin`
//! binary. The core pipeline (composition, TF-IDF, similarity, fuzzy
//! matching, ranking) lives in `kindred-core`; this crate only wires it
//! to files and the terminal.

pub mod catalog;
pub mod config;
pub mod matches;
pub mod recommend;
pub mod show;
pub mod stats;
pub mod titles;
