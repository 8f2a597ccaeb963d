//! Run orchestration
//!
//! `ChunkHunter` owns the immutable dictionary matcher and the report
//! writer. Documents are processed one after another; each document's
//! buffers live only for its own iteration.

use crate::config::HunterConfig;
use crate::corpus::enumerate_documents;
use crate::dictionary::load_dictionary;
use crate::interface::{HunterResult, ReportPaths, RunSummary};
use crate::normalize::Document;
use crate::report::ReportWriter;
use crate::search::ChunkMatcher;
use std::path::{Path, PathBuf};

pub struct ChunkHunter {
    input_dir: PathBuf,
    matcher: ChunkMatcher,
    writer: ReportWriter,
}

impl ChunkHunter {
    /// Load the dictionary named by `config`. Fails if it cannot be read.
    pub fn new(config: &HunterConfig) -> HunterResult<Self> {
        let chunks = load_dictionary(&config.dictionary)?;
        tracing::info!(
            dictionary = %config.dictionary.display(),
            chunks = chunks.len(),
            "chunk dictionary ready"
        );
        Ok(Self {
            input_dir: config.input_dir.clone(),
            matcher: ChunkMatcher::new(&chunks),
            writer: ReportWriter::new(&config.output_dir),
        })
    }

    pub fn matcher(&self) -> &ChunkMatcher {
        &self.matcher
    }

    /// Match one document and write its three reports
    pub fn process_document(&self, path: &Path) -> HunterResult<ReportPaths> {
        let doc = Document::read(path);
        let result = self.matcher.match_document(&doc);
        self.writer.write(path, &result)
    }

    /// Process every document of the input folder
    ///
    /// Startup failures (unwalkable input folder, no documents) are returned
    /// before anything is written. A document whose reports cannot be
    /// written is logged and skipped.
    pub fn run(&self) -> HunterResult<RunSummary> {
        let docs = enumerate_documents(&self.input_dir)?;
        let mut summary = RunSummary { documents: docs.len(), ..RunSummary::default() };

        for path in docs {
            match self.process_document(&path) {
                Ok(paths) => {
                    tracing::debug!(path = %path.display(), html = %paths.html.display(), "reports written");
                    summary.written += 1;
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), error = %e, "abandoning reports");
                    summary.failed.push(path);
                }
            }
        }

        tracing::info!(
            documents = summary.documents,
            written = summary.written,
            failed = summary.failed.len(),
            output = %self.writer.output_dir().display(),
            "run complete"
        );
        Ok(summary)
    }
}
