//! Run configuration
//!
//! Defaults follow the conventional layout of a Chunk Hunter working
//! directory: documents under `input/`, the dictionary in `chunks.txt` and
//! reports written to `output/`.

use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_DICTIONARY: &str = "chunks.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterConfig {
    /// Folder scanned recursively for `.txt` documents
    pub input_dir: PathBuf,
    /// Chunk dictionary, one phrase per line
    pub dictionary: PathBuf,
    /// Folder receiving the reports, created when missing
    pub output_dir: PathBuf,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl HunterConfig {
    /// Conventional layout rooted at `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input_dir: dir.join(DEFAULT_INPUT_DIR),
            dictionary: dir.join(DEFAULT_DICTIONARY),
            output_dir: dir.join(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HunterConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.dictionary, PathBuf::from("chunks.txt"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_in_dir() {
        let config = HunterConfig::in_dir("/work");
        assert_eq!(config.input_dir, PathBuf::from("/work/input"));
        assert_eq!(config.dictionary, PathBuf::from("/work/chunks.txt"));
        assert_eq!(config.output_dir, PathBuf::from("/work/output"));
    }
}
