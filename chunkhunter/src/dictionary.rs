//! Chunk dictionary loading
//!
//! The dictionary is a flat text file with one chunk per line. It is read
//! once at startup; a missing or unreadable file aborts the run.

use crate::interface::{HunterError, HunterResult};
use crate::models::ChunkSet;
use std::fs;
use std::path::Path;

/// Load and normalize the chunk dictionary at `path`
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_dictionary(path: &Path) -> HunterResult<ChunkSet> {
    let bytes = fs::read(path).map_err(|source| HunterError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;
    let chunks = ChunkSet::from_text(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), chunks = chunks.len(), "loaded chunk dictionary");
    Ok(chunks)
}
