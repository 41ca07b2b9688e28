//! Sequential batch driver for statement documents.
//!
//! Documents are handled one at a time, start to finish. A document whose
//! text cannot be extracted, or whose record cannot be written, is skipped
//! and the run continues with the next one.

use std::fs;
use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions, Pattern};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{CcParseError, Result};
use crate::models::config::OutputConfig;
use crate::models::statement::{ExtractionRecord, SummaryEntry};
use crate::pdf::TextExtractor;
use crate::statement::StatementParser;

/// A document left out of the summary.
#[derive(Debug, Clone)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a directory run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Documents found in the directory.
    pub documents: usize,
    /// One entry per successfully parsed document, in processing order.
    pub entries: Vec<SummaryEntry>,
    /// Documents that were skipped, with the reason.
    pub skipped: Vec<SkippedDocument>,
    /// Summary file, if one was written.
    pub summary_path: Option<PathBuf>,
}

/// Runs a [`StatementParser`] over documents and writes the results.
pub struct BatchRunner<'a, E> {
    parser: &'a StatementParser,
    extractor: E,
    output: OutputConfig,
}

impl<'a, E: TextExtractor> BatchRunner<'a, E> {
    pub fn new(parser: &'a StatementParser, extractor: E) -> Self {
        Self {
            parser,
            extractor,
            output: OutputConfig::default(),
        }
    }

    /// Set the output configuration.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Whether `path` has the document extension (case-insensitive).
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.output.extension))
    }

    /// Documents directly inside `dir`, sorted by path. Not recursive.
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let dir = dir
            .to_str()
            .ok_or_else(|| CcParseError::Config(format!("non UTF-8 path: {}", dir.display())))?;
        let pattern = format!("{}/*.{}", Pattern::escape(dir), self.output.extension);

        let options = MatchOptions {
            case_sensitive: false,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let mut files: Vec<PathBuf> = glob_with(&pattern, options)
            .map_err(|e| CcParseError::Config(format!("bad glob pattern {}: {}", pattern, e)))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        debug!("Found {} documents matching {}", files.len(), pattern);
        Ok(files)
    }

    /// Parse one document and write its record next to it.
    ///
    /// Returns the record and the path it was written to.
    pub fn process_file(&self, path: &Path) -> Result<(ExtractionRecord, PathBuf)> {
        let record = self.parser.parse_document(&self.extractor, path)?;
        let output_path = self.write_record(path, &record)?;
        Ok((record, output_path))
    }

    /// Write `record` as JSON beside `document`, swapping the extension.
    pub fn write_record(&self, document: &Path, record: &ExtractionRecord) -> Result<PathBuf> {
        let output_path = document.with_extension("json");
        fs::write(&output_path, self.to_json(record)?)?;
        debug!("Wrote record to {}", output_path.display());
        Ok(output_path)
    }

    /// Process every document in `dir` and write the summary.
    pub fn run_directory(&self, dir: &Path) -> Result<BatchReport> {
        self.run_directory_with(dir, |_, _| {})
    }

    /// Like [`BatchRunner::run_directory`], calling `on_document` after each
    /// document with its outcome.
    ///
    /// No summary is written when the directory holds no documents.
    pub fn run_directory_with<F>(&self, dir: &Path, on_document: F) -> Result<BatchReport>
    where
        F: FnMut(&Path, &Result<(ExtractionRecord, PathBuf)>),
    {
        let files = self.discover(dir)?;
        if files.is_empty() {
            info!("No documents found in {}", dir.display());
            return Ok(BatchReport::default());
        }

        self.run_files_with(dir, &files, on_document)
    }

    /// Process `files` in order and write the summary into `dir`.
    pub fn run_files_with<F>(
        &self,
        dir: &Path,
        files: &[PathBuf],
        mut on_document: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(&Path, &Result<(ExtractionRecord, PathBuf)>),
    {
        let mut report = BatchReport {
            documents: files.len(),
            ..Default::default()
        };

        for path in files {
            let outcome = self.process_file(path);
            on_document(path.as_path(), &outcome);

            match outcome {
                Ok((record, _)) => report.entries.push(SummaryEntry {
                    filename: file_name(path),
                    data: record,
                }),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    report.skipped.push(SkippedDocument {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        let summary_path = dir.join(&self.output.summary_file_name);
        fs::write(&summary_path, self.to_json(&report.entries)?)?;
        info!(
            "Wrote summary of {} documents ({} skipped) to {}",
            report.entries.len(),
            report.skipped.len(),
            summary_path.display()
        );
        report.summary_path = Some(summary_path);

        Ok(report)
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.output.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
