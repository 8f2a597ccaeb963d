//! Chunk Hunter public interface
//!
//! Result records shared between the matcher, the report writer and callers,
//! plus the library error type.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS
// ═══════════════════════════════════════════════════════════════════════════════

/// A dictionary chunk found in one document
///
/// Field order matches the CSV columns `chunk,length,frequency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Chunk text without the guard space
    pub chunk: String,
    /// Character count of the guarded chunk, guard space included.
    /// Kept as a character count for compatibility with existing reports.
    pub length: usize,
    /// Number of (possibly overlapping) occurrences in the lowercased text
    pub frequency: usize,
}

/// Aggregate statistics for one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    /// Sum over matched chunks of `chunk words × frequency`
    pub chunkwords: usize,
    /// Whitespace-separated words in the document
    pub words: usize,
    /// Size of the dictionary the document was checked against
    pub chunks_checked: usize,
}

impl DocumentStats {
    /// Chunk density as a percentage. A document without words has 0% density.
    pub fn percentage(&self) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        self.chunkwords as f64 / self.words as f64 * 100.0
    }
}

/// Everything the matcher produced for one document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMatch {
    /// One record per matched chunk, in dictionary iteration order
    pub records: Vec<MatchRecord>,
    /// Original text with every match wrapped in highlight markup
    pub annotated: String,
    pub stats: DocumentStats,
}

/// Output files written for one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub html: PathBuf,
    pub csv: PathBuf,
    pub stats: PathBuf,
}

/// Outcome of a full run over the input folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// `.txt` documents found in the input folder
    pub documents: usize,
    /// Documents whose three reports were written
    pub written: usize,
    /// Documents abandoned because a report could not be written
    pub failed: Vec<PathBuf>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Error type for Chunk Hunter operations
#[derive(Debug, Error)]
pub enum HunterError {
    #[error("Unable to open the chunks dictionary {}: {source}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to walk through input folder {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("No files found in input folder {}", .0.display())]
    NoDocuments(PathBuf),
    #[error("Unable to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing csv {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl HunterError {
    /// Whether the error ends the whole run rather than a single document
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            HunterError::Dictionary { .. } | HunterError::Walk { .. } | HunterError::NoDocuments(_)
        )
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        HunterError::Write { path: path.to_path_buf(), source }
    }
}

pub type HunterResult<T> = Result<T, HunterError>;
