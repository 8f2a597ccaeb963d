//! Input document discovery

use crate::interface::{HunterError, HunterResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix of the documents to scan (case-sensitive)
pub const DOCUMENT_SUFFIX: &str = ".txt";

/// Recursively list every `.txt` file under `root`
///
/// Entries are visited in file-name order so reports come out in a stable
/// sequence. Any traversal error, or an empty result, is fatal.
pub fn enumerate_documents(root: &Path) -> HunterResult<Vec<PathBuf>> {
    let mut docs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| HunterError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path().to_string_lossy().ends_with(DOCUMENT_SUFFIX) {
            docs.push(entry.into_path());
        }
    }

    if docs.is_empty() {
        return Err(HunterError::NoDocuments(root.to_path_buf()));
    }
    Ok(docs)
}
