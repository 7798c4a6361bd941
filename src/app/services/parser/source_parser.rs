//! Source file reading and per-file parse orchestration
//!
//! Reads each configured source file whole, decodes UTF-8 with lossy
//! replacement, and delegates record assembly to the builder. Missing or
//! oversized files are skipped with a warning; a partial dataset is a
//! valid outcome.

use super::line_classifier::ParserRules;
use super::record_builder::{build_records, FileParse};
use crate::app::models::Additive;
use crate::constants::CODES_LOGGED_PER_FILE;
use crate::Result;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of parsing the whole source set
#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// Concatenated per-file record lists, in file-processing order
    pub records: Vec<Additive>,
    /// Files successfully read and parsed
    pub files_parsed: usize,
    /// Files skipped because they were missing or oversized
    pub files_skipped: usize,
    /// Lines dropped across all files
    pub dropped_lines: usize,
}

/// Parser over the configured source file set
#[derive(Debug)]
pub struct SourceParser<'a> {
    rules: &'a ParserRules,
    max_file_bytes: u64,
}

impl<'a> SourceParser<'a> {
    /// Create a parser borrowing the shared rule set
    pub fn new(rules: &'a ParserRules, max_file_bytes: u64) -> Self {
        Self {
            rules,
            max_file_bytes,
        }
    }

    /// Parse every source file in order.
    ///
    /// Files never share builder state, so duplicate codes across files
    /// surface as separate candidate records for the merger.
    pub async fn parse_sources(
        &self,
        paths: &[PathBuf],
        progress_bar: Option<&ProgressBar>,
    ) -> Result<ParseOutcome> {
        let mut outcome = ParseOutcome::default();

        for path in paths {
            if let Some(pb) = progress_bar {
                pb.set_message(format!("Parsing {}", file_label(path)));
            }

            match self.read_source(path).await? {
                Some(content) => {
                    let parse = build_records(self.rules, &content);
                    log_file_parse(path, &parse);
                    outcome.files_parsed += 1;
                    outcome.dropped_lines += parse.dropped_lines;
                    outcome.records.extend(parse.records);
                }
                None => outcome.files_skipped += 1,
            }

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        info!(
            "Parsed {} files ({} skipped): {} candidate records",
            outcome.files_parsed,
            outcome.files_skipped,
            outcome.records.len()
        );
        Ok(outcome)
    }

    /// Read one source file whole, or `None` if it must be skipped
    async fn read_source(&self, path: &Path) -> Result<Option<String>> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(_) => {
                warn!("Missing source file, skipping: {}", path.display());
                return Ok(None);
            }
        };

        if metadata.len() > self.max_file_bytes {
            warn!(
                "Source file exceeds {} byte limit ({} bytes), skipping: {}",
                self.max_file_bytes,
                metadata.len(),
                path.display()
            );
            return Ok(None);
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| crate::Error::io(format!("Failed to read {}", path.display()), e))?;

        // Best-effort decode: invalid UTF-8 sequences become replacement chars
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

fn log_file_parse(path: &Path, parse: &FileParse) {
    let shown: Vec<&str> = parse
        .codes
        .iter()
        .take(CODES_LOGGED_PER_FILE)
        .map(|s| s.as_str())
        .collect();
    let suffix = if parse.codes.len() > CODES_LOGGED_PER_FILE {
        "..."
    } else {
        ""
    };
    info!(
        "Parsed {}: {} codes -> {:?}{}",
        file_label(path),
        parse.codes.len(),
        shown,
        suffix
    );
    if parse.dropped_lines > 0 {
        debug!(
            "{}: dropped {} unclassifiable lines",
            file_label(path),
            parse.dropped_lines
        );
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
