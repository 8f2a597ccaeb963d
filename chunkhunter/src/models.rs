//! Core data models for Chunk Hunter
//!
//! `Chunk` is a normalized dictionary phrase and `ChunkSet` the deduplicated
//! dictionary built from raw lines.

use std::collections::BTreeSet;

/// Prepended to chunks and document text to anchor matches at a word start.
/// Only the left side is guarded: ` was always` still matches ` was alwaysness`.
pub const GUARD: char = ' ';

// ─────────────────────────────────────────────────────────────────────────────
// CHUNK
// ─────────────────────────────────────────────────────────────────────────────

/// A normalized dictionary phrase: trimmed, lowercased, guard-prefixed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chunk {
    guarded: String,
}

impl Chunk {
    /// Normalize a raw dictionary line
    pub fn new(raw: &str) -> Self {
        let mut guarded = String::with_capacity(raw.len() + 1);
        guarded.push(GUARD);
        guarded.push_str(&raw.trim().to_lowercase());
        Self { guarded }
    }

    /// Form used for matching, guard space included
    pub fn guarded(&self) -> &str {
        &self.guarded
    }

    /// Chunk text with the guard space stripped
    pub fn text(&self) -> &str {
        self.guarded.trim()
    }

    /// Character count of the guarded form
    pub fn char_len(&self) -> usize {
        self.guarded.chars().count()
    }

    /// Whitespace-separated words of the chunk text
    pub fn word_count(&self) -> usize {
        self.text().split_whitespace().count()
    }

    /// True for a chunk normalized from a blank line
    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CHUNK SET
// ─────────────────────────────────────────────────────────────────────────────

/// Deduplicated dictionary of chunks, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkSet {
    chunks: BTreeSet<Chunk>,
}

impl ChunkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary source, one chunk per line
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Normalize and insert a raw line. Returns false for blank lines and
    /// for chunks already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let chunk = Chunk::new(raw);
        if chunk.is_blank() {
            return false;
        }
        self.chunks.insert(chunk)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn contains(&self, chunk: &Chunk) -> bool {
        self.chunks.contains(chunk)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter()
    }
}

impl<'a> FromIterator<&'a str> for ChunkSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ChunkSet::new();
        for line in iter {
            set.insert(line);
        }
        set
    }
}
