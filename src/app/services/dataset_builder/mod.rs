//! Dataset assembly pipeline for parsed additive records
//!
//! Consumes the concatenated per-file record streams and produces the
//! finalized canonical record sequence:
//!
//! 1. **Deduplication**: merge duplicate codes across files, keeping the
//!    structurally richer record ([`deduplication`])
//! 2. **Grading**: derive the risk tier from the final health-risk text
//!    ([`grading`])
//! 3. **Finalization**: numeric-then-lexical ordering and name fallback
//!    ([`finalization`])
//!
//! The merger is the join point of the pipeline: it requires every
//! per-file result before it can run. After finalization records are
//! immutable and only read by the artifact writers.

pub mod deduplication;
pub mod finalization;
pub mod grading;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use deduplication::deduplicate_records;
pub use finalization::{finalize_records, missing_expected_codes};
pub use grading::classify_health_risks;
pub use stats::BuildStats;

use crate::app::models::Additive;
use crate::app::services::parser::ParseOutcome;
use tracing::warn;

/// Run the full assembly pipeline over the parse outcome
pub fn build_dataset(outcome: ParseOutcome) -> (Vec<Additive>, BuildStats) {
    let mut stats = BuildStats {
        files_parsed: outcome.files_parsed,
        files_skipped: outcome.files_skipped,
        records_parsed: outcome.records.len(),
        dropped_lines: outcome.dropped_lines,
        ..Default::default()
    };

    let mut records = deduplicate_records(outcome.records);
    stats.duplicates_removed = stats.records_parsed - records.len();

    finalize_records(&mut records);
    stats.records_final = records.len();

    stats.missing_expected = missing_expected_codes(&records);
    if !stats.missing_expected.is_empty() {
        warn!(
            "Expected codes missing after parse: {:?}",
            stats.missing_expected
        );
    }

    (records, stats)
}
