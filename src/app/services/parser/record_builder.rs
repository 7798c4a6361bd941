//! Per-file record assembly
//!
//! A tagged state value is threaded through a fold over the classified
//! line stream:
//!
//! ```text
//! Idle -(code header)-> RecordOpen{no section}
//!      -(section header)-> RecordOpen{section = S}
//!      -(continuation)-> RecordOpen{section = S}
//!      -(code header)-> close current, open next
//! ```
//!
//! End of input flushes the open record. Each file is built independently;
//! the same code in two files yields two candidates for later merging.

use super::line_classifier::{LineKind, ParserRules};
use crate::app::models::{Additive, FieldKey};

/// Builder state for one source file
#[derive(Debug)]
enum BuilderState {
    /// No record open; continuations are dropped
    Idle,
    /// A record is open, with the most recently opened section if any
    RecordOpen {
        record: Additive,
        section: Option<FieldKey>,
    },
}

/// Result of parsing one source file
#[derive(Debug, Default)]
pub struct FileParse {
    /// Records in the order their code headers appeared
    pub records: Vec<Additive>,
    /// Every code header seen, in order (for progress logging)
    pub codes: Vec<String>,
    /// Non-empty lines dropped because no record or section was open
    pub dropped_lines: usize,
}

/// Assemble draft records from one file's text content
pub fn build_records(rules: &ParserRules, content: &str) -> FileParse {
    let mut parse = FileParse::default();
    let mut state = BuilderState::Idle;

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        state = match (state, rules.classify(line)) {
            (state, LineKind::CodeHeader { code }) => {
                if let BuilderState::RecordOpen { record, .. } = state {
                    parse.records.push(record);
                }
                parse.codes.push(code.to_string());
                BuilderState::RecordOpen {
                    record: Additive::new(code),
                    section: None,
                }
            }
            (
                BuilderState::RecordOpen {
                    mut record,
                    section: _,
                },
                LineKind::SectionHeader { key, value },
            ) => {
                if let Some(marker) = value.preserved_marker {
                    record.append_field(FieldKey::OtherDetails, &marker);
                }
                // A repeated section header replaces the field outright
                *record.field_mut(key) = value.value;
                BuilderState::RecordOpen {
                    record,
                    section: Some(key),
                }
            }
            (
                BuilderState::RecordOpen {
                    mut record,
                    section: Some(key),
                },
                LineKind::Continuation(text),
            ) => {
                record.append_field(key, text);
                BuilderState::RecordOpen {
                    record,
                    section: Some(key),
                }
            }
            // Stray text before any record or section opens is dropped
            (state, _) => {
                parse.dropped_lines += 1;
                state
            }
        };
    }

    if let BuilderState::RecordOpen { record, .. } = state {
        parse.records.push(record);
    }

    parse
}
