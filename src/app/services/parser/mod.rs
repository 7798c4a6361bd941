//! Source text parsing for additive documents
//!
//! This module turns the line-oriented additive grammar into draft records:
//! - [`line_classifier`] - Per-line classification and value normalization
//! - [`record_builder`] - Per-file state machine assembling records
//! - [`source_parser`] - File reading, skip policy, and progress reporting
//!
//! Parsing is deliberately permissive: unclassifiable lines are dropped
//! rather than surfaced as errors, so stray header and footer text in the
//! source documents never aborts a run.

pub mod line_classifier;
pub mod record_builder;
pub mod source_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_classifier::{LineKind, ParserRules, SectionValue};
pub use record_builder::{build_records, FileParse};
pub use source_parser::{ParseOutcome, SourceParser};
