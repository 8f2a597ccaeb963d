//! Document text preparation
//!
//! A document is guard-prefixed so a chunk at the very start can match, and
//! lowercased for detection. The original case is kept for highlighting.

use crate::models::GUARD;
use std::fs;
use std::path::{Path, PathBuf};

/// A document prepared for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    /// Guard-prefixed original text
    pub original: String,
    /// Lowercased copy of `original`, used only for detection
    pub lowered: String,
    /// Non-empty whitespace-separated fields
    pub words: usize,
}

impl Document {
    /// Build a document from raw bytes. Invalid UTF-8 is replaced.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let mut original = String::with_capacity(text.len() + 1);
        original.push(GUARD);
        original.push_str(&text);

        let lowered = original.to_lowercase();
        let words = count_words(&original);
        Self { path: path.into(), original, lowered, words }
    }

    /// Read a document from disk. An unreadable file is logged and treated
    /// as empty so the run can continue.
    pub fn read(path: &Path) -> Self {
        match fs::read(path) {
            Ok(bytes) => Self::from_bytes(path, &bytes),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Unable to open the file");
                Self::from_bytes(path, &[])
            }
        }
    }
}

/// Count non-empty whitespace-separated fields
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_and_lowercase() {
        let doc = Document::from_bytes("input/a.txt", b"Good Morning, good morning!");
        assert_eq!(doc.original, " Good Morning, good morning!");
        assert_eq!(doc.lowered, " good morning, good morning!");
        assert_eq!(doc.words, 4);
    }

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(count_words("  one\ttwo\n\nthree   "), 3);
        assert_eq!(count_words(" "), 0);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_unreadable_document_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::read(&dir.path().join("missing.txt"));
        assert_eq!(doc.original, " ");
        assert_eq!(doc.words, 0);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let doc = Document::from_bytes("x.txt", b"ok \xff fine");
        assert_eq!(doc.words, 3);
        assert!(doc.original.contains('\u{FFFD}'));
    }
}
