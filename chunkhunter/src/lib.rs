//! Chunk Hunter - scans text files for a set of predefined chunks
//!
//! A dictionary of multi-word phrases ("chunks") is matched case-insensitively
//! against every `.txt` document of an input folder. Each document gets a
//! highlighted HTML copy, a CSV frequency table and a statistics summary.
//!
//! The pipeline is strictly sequential: the dictionary is loaded once, then
//! each document goes through normalization, matching and report writing.

pub mod config;
pub mod corpus;
pub mod dictionary;
mod hunter;
pub mod interface;
pub mod models;
pub mod normalize;
pub mod report;
pub mod search;

pub use config::HunterConfig;
pub use hunter::ChunkHunter;
pub use interface::*;
