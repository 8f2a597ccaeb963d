//! Per-document report files
//!
//! Three artifacts are written for every document, in this order:
//! `result_<name>.html`, `stats_<name>.csv` and `stats_<name>.txt`, where
//! `<name>` is the document's file name with every `.` replaced by `-`.
//! The first failure abandons the document's remaining writes.

use crate::interface::{DocumentMatch, DocumentStats, HunterError, HunterResult, MatchRecord, ReportPaths};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Header row of the frequency table
pub const CSV_HEADER: [&str; 3] = ["chunk", "length", "frequency"];

const BANNER: &str = "--------------------------------------------------------";

/// Report name for a document: its file name with `.` replaced by `-`
pub fn report_name(document: &Path) -> String {
    document
        .file_name()
        .map(|name| name.to_string_lossy().replace('.', "-"))
        .unwrap_or_default()
}

impl ReportPaths {
    /// Output paths for `document` inside `output_dir`
    pub fn for_document(output_dir: &Path, document: &Path) -> Self {
        let name = report_name(document);
        Self {
            html: output_dir.join(format!("result_{name}.html")),
            csv: output_dir.join(format!("stats_{name}.csv")),
            stats: output_dir.join(format!("stats_{name}.txt")),
        }
    }
}

/// Render the statistics summary for `document`
pub fn render_statistics(document: &Path, stats: &DocumentStats) -> String {
    format!(
        "{BANNER}\n\
         Chunk Hunter statistics for {}\n\
         {BANNER}\n\n\
         Frequency: {} chunkwords / {} words = {:.2}%\n\n\
         Text checked against {} registered combinations\n\n",
        document.display(),
        stats.chunkwords,
        stats.words,
        stats.percentage(),
        stats.chunks_checked,
    )
}

/// Writes report files into one output directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the three reports for `document`, creating the output
    /// directory if needed
    pub fn write(&self, document: &Path, result: &DocumentMatch) -> HunterResult<ReportPaths> {
        fs::create_dir_all(&self.output_dir).map_err(|source| HunterError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let paths = ReportPaths::for_document(&self.output_dir, document);
        write_text(&paths.html, &result.annotated)?;
        write_frequency_table(&paths.csv, &result.records)?;
        write_text(&paths.stats, &render_statistics(document, &result.stats))?;
        Ok(paths)
    }
}

fn write_text(path: &Path, contents: &str) -> HunterResult<()> {
    let file = File::create(path).map_err(|e| HunterError::write(path, e))?;
    let mut out = BufWriter::new(file);
    out.write_all(contents.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| HunterError::write(path, e))
}

fn write_frequency_table(path: &Path, records: &[MatchRecord]) -> HunterResult<()> {
    let csv_error = |source| HunterError::Csv { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(|e| HunterError::write(path, e))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for record in records {
        writer.serialize(record).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| HunterError::write(path, e))
}
