//! Tests for the source text parser
//!
//! Covers line classification, value normalization, the record builder
//! state machine, and the file-level skip policy.


use crate::app::services::parser::ParserRules;

/// Compile the shared rule set for a test
pub fn test_rules() -> ParserRules {
    ParserRules::new().expect("built-in parser rules must compile")
}

/// A small two-record document exercising sections, continuations,
/// placeholders, and stray text
pub const SAMPLE_DOCUMENT: &str = "\
Food additive reference, part 1

E100 - Curcumin
Name: E100 - Curcumin
Description: A natural yellow pigment
extracted from turmeric root.
Health risks: Generally recognized as safe.
Acceptable daily intake (ADI): Not specified.

E102
Name: Tartrazine
Function: Coloring
Health risks: May cause hyperactivity in children.
";
