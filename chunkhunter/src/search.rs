//! Chunk matching and highlighting
//!
//! Detection runs on the lowercased document with plain substring search and
//! counts overlapping occurrences. Highlighting runs on the original-case
//! text with a case-insensitive pattern per chunk; patterns are escaped and
//! compiled once per dictionary, so chunk text is always matched literally.

use crate::interface::{DocumentMatch, DocumentStats, MatchRecord};
use crate::models::{Chunk, ChunkSet};
use crate::normalize::Document;
use regex::{Captures, Regex, RegexBuilder};

/// Markup opening a highlighted span
pub const HIGHLIGHT_OPEN: &str = "<span style=\"background-color: #FFFF00\">";
/// Markup closing a highlighted span
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Count occurrences of `needle` in `haystack`, overlaps included
///
/// Every start position counts: `"aa"` occurs twice in `"aaa"`.
pub fn count_overlapping(haystack: &str, needle: &str) -> usize {
    let Some(first) = needle.chars().next() else {
        return 0;
    };
    let step = first.len_utf8();
    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + step;
    }
    count
}

/// Wrap every match of `pattern` in highlight markup
pub fn highlight(text: &str, pattern: &Regex) -> String {
    pattern
        .replace_all(text, |caps: &Captures| {
            format!("{HIGHLIGHT_OPEN}{}{HIGHLIGHT_CLOSE}", &caps[0])
        })
        .into_owned()
}

/// Literal, case-insensitive pattern for a chunk's guarded form
pub fn chunk_pattern(chunk: &Chunk) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(chunk.guarded()))
        .case_insensitive(true)
        .build()
}

#[derive(Debug)]
struct CompiledChunk {
    chunk: Chunk,
    /// None when the pattern could not be built; the chunk is still counted
    pattern: Option<Regex>,
}

/// Matches documents against a fixed dictionary
#[derive(Debug)]
pub struct ChunkMatcher {
    chunks: Vec<CompiledChunk>,
}

impl ChunkMatcher {
    pub fn new(chunks: &ChunkSet) -> Self {
        let chunks = chunks
            .iter()
            .map(|chunk| {
                let pattern = match chunk_pattern(chunk) {
                    Ok(re) => Some(re),
                    Err(e) => {
                        tracing::warn!(chunk = chunk.text(), error = %e, "skipping highlight for chunk");
                        None
                    }
                };
                CompiledChunk { chunk: chunk.clone(), pattern }
            })
            .collect();
        Self { chunks }
    }

    /// Number of dictionary chunks every document is checked against
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Find every dictionary chunk in `doc`, count it and highlight it
    pub fn match_document(&self, doc: &Document) -> DocumentMatch {
        let mut annotated = doc.original.clone();
        let mut records = Vec::new();
        let mut chunkwords = 0;

        for compiled in &self.chunks {
            let chunk = &compiled.chunk;
            let frequency = count_overlapping(&doc.lowered, chunk.guarded());
            if frequency == 0 {
                continue;
            }

            if let Some(pattern) = &compiled.pattern {
                annotated = highlight(&annotated, pattern);
            }

            chunkwords += chunk.word_count() * frequency;
            records.push(MatchRecord {
                chunk: chunk.text().to_string(),
                length: chunk.char_len(),
                frequency,
            });
        }

        tracing::debug!(
            path = %doc.path.display(),
            matched = records.len(),
            chunkwords,
            words = doc.words,
            "matched document"
        );

        DocumentMatch {
            records,
            annotated,
            stats: DocumentStats {
                chunkwords,
                words: doc.words,
                chunks_checked: self.chunks.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(lines: &[&str]) -> ChunkMatcher {
        ChunkMatcher::new(&lines.iter().copied().collect())
    }

    fn marked(s: &str) -> String {
        format!("{HIGHLIGHT_OPEN}{s}{HIGHLIGHT_CLOSE}")
    }

    #[test]
    fn test_count_overlapping() {
        assert_eq!(count_overlapping("aaa", "aa"), 2);
        assert_eq!(count_overlapping(" a a a", " a a"), 2);
        assert_eq!(count_overlapping(" good morning, good morning!", " good morning"), 2);
        assert_eq!(count_overlapping("nothing here", " absent"), 0);
        assert_eq!(count_overlapping("anything", ""), 0);
    }

    #[test]
    fn test_count_overlapping_multibyte() {
        assert_eq!(count_overlapping(" ça ça ça", " ça ça"), 2);
        assert_eq!(count_overlapping("ééé", "éé"), 2);
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        let m = matcher(&["was always"]);
        let doc = Document::from_bytes("a.txt", b"Was Always, WAS ALWAYS and was always.");
        let result = m.match_document(&doc);

        assert_eq!(result.records[0].frequency, 3);
        assert!(result.annotated.contains(&marked(" WAS ALWAYS")));
        assert!(result.annotated.contains(&marked(" was always")));
        // Leading occurrence matches thanks to the document guard
        assert!(result.annotated.starts_with(&marked(" Was Always")));
    }

    #[test]
    fn test_left_guard_only() {
        let m = matcher(&["was always"]);
        let doc = Document::from_bytes("a.txt", b"itwas always, but was alwaysness too");
        let result = m.match_document(&doc);
        // "itwas" is rejected by the guard; "alwaysness" is not guarded on the right
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].frequency, 1);
    }

    #[test]
    fn test_good_morning_scenario() {
        let m = matcher(&["good morning"]);
        let doc = Document::from_bytes("input/greeting.txt", b"Good Morning, good morning!");
        let result = m.match_document(&doc);

        assert_eq!(
            result.records,
            vec![MatchRecord { chunk: "good morning".into(), length: 13, frequency: 2 }]
        );
        assert_eq!(
            result.annotated,
            format!("{},{}!", marked(" Good Morning"), marked(" good morning"))
        );
        assert_eq!(result.stats.chunkwords, 4);
        assert_eq!(result.stats.words, 4);
        assert_eq!(result.stats.chunks_checked, 1);
        assert_eq!(format!("{:.2}", result.stats.percentage()), "100.00");
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let m = matcher(&["a.b", "(c)", "d+"]);
        let doc = Document::from_bytes("a.txt", b"axb a.b (c) c dd+");
        let result = m.match_document(&doc);

        let chunks: Vec<_> = result.records.iter().map(|r| r.chunk.as_str()).collect();
        assert_eq!(chunks, vec!["(c)", "a.b"]);
        assert!(result.annotated.contains(&marked(" a.b")));
        assert!(result.annotated.contains(&marked(" (c)")));
        assert!(!result.annotated.contains(&marked(" axb")));
    }

    #[test]
    fn test_unmatched_chunks_are_counted_as_checked() {
        let m = matcher(&["good morning", "thank you", "see you"]);
        let doc = Document::from_bytes("a.txt", b"Thank you very much");
        let result = m.match_document(&doc);

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.stats.chunks_checked, 3);
        assert_eq!(result.stats.chunkwords, 2);
        assert_eq!(result.stats.words, 4);
    }

    #[test]
    fn test_overlapping_chunks_nest_markup() {
        let m = matcher(&["good", "good morning"]);
        let doc = Document::from_bytes("a.txt", b"good morning");
        let result = m.match_document(&doc);

        // " good" is applied first, then " good morning" no longer matches the
        // annotated text literally, so only the shorter span is marked.
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.annotated, format!("{} morning", marked(" good")));
        assert_eq!(result.stats.chunkwords, 3);
    }

    #[test]
    fn test_empty_document() {
        let m = matcher(&["good morning"]);
        let doc = Document::from_bytes("a.txt", b"");
        let result = m.match_document(&doc);

        assert!(result.records.is_empty());
        assert_eq!(result.annotated, " ");
        assert_eq!(result.stats.words, 0);
        assert_eq!(result.stats.percentage(), 0.0);
    }

    #[test]
    fn test_empty_dictionary() {
        let m = ChunkMatcher::new(&ChunkSet::new());
        assert!(m.is_empty());
        let doc = Document::from_bytes("a.txt", b"some words here");
        let result = m.match_document(&doc);
        assert!(result.records.is_empty());
        assert_eq!(result.annotated, doc.original);
        assert_eq!(result.stats.chunks_checked, 0);
    }
}
