//! Application constants for the additive processor
//!
//! This module contains the source file set, artifact names, parser
//! marker tables, and risk keyword tiers used throughout the pipeline.

// =============================================================================
// Source Files and Artifact Names
// =============================================================================

/// Source text files, in processing order. Each file covers one numeric
/// code range; `dodatek.txt` is a supplementary file with late additions.
pub const SOURCE_FILE_NAMES: &[&str] = &[
    "aditivi100-199.txt",
    "aditivi200-299.txt",
    "aditivi300-399.txt",
    "aditivi400-499.txt",
    "aditivi500-599.txt",
    "aditivi600-699.txt",
    "aditivi900-999.txt",
    "aditivi1000-1599.txt",
    "dodatek.txt",
];

/// Default assets directory holding the source text files
pub const DEFAULT_ASSETS_DIR: &str = "assets/additives";

/// Canonical (pretty-printed) dataset artifact filename
pub const CANONICAL_FILENAME: &str = "e_additives_database.json";

/// Compact (minified) dataset artifact filename
pub const COMPACT_FILENAME: &str = "e_additives_database.min.json";

/// Code-to-position lookup index artifact filename
pub const INDEX_FILENAME: &str = "e_additives_index.json";

// =============================================================================
// Parser Marker Tables
// =============================================================================

/// Placeholder phrases that blank a section value. Matching is prefix-based
/// against the lower-cased value with any trailing period stripped.
pub const EMPTY_MARKERS: &[&str] = &[
    "not specified",
    "no data",
    "insufficient relevant content",
    "value specified (not provided in excerpt)",
    "specified, but without a specific value in the extract",
    "not limited or determined",
    "banned (no detail)",
];

/// The one placeholder whose original phrasing is preserved in
/// `otherDetails` for traceability when it blanks another field
pub const INSUFFICIENT_CONTENT_MARKER: &str = "insufficient relevant content";

/// Placeholder text emitted for empty fields in the text export
pub const NOT_SPECIFIED_TEXT: &str = "Not specified.";

// =============================================================================
// Risk Keyword Tiers
// =============================================================================

/// Substrings indicating a HIGH severity health risk.
/// Checked before the moderate tier; a record matching both grades HIGH.
pub const HIGH_RISK_KEYWORDS: &[&str] = &["carcin", "tumor", "chromosome damage", "banned"];

/// Substrings indicating a MODERATE severity health risk
pub const MODERATE_RISK_KEYWORDS: &[&str] = &[
    "hyperactivity",
    "allerg",
    "nausea",
    "migraine",
    "hives",
    "abdominal pain",
];

// =============================================================================
// Sanity Checks and Limits
// =============================================================================

/// Codes that must appear after a full parse of the default source set.
/// Absence is reported as a warning, never an abort.
pub const EXPECTED_CODES: &[&str] = &["E101", "E102", "E103", "E107"];

/// Maximum size accepted for a single input file. Larger files are
/// skipped with a warning to bound memory use.
pub const MAX_INPUT_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Number of richly-populated records shown in the default-mode preview
pub const PREVIEW_RECORD_COUNT: usize = 5;

/// Maximum characters of serialized JSON shown per preview record
pub const PREVIEW_JSON_CHARS: usize = 200;

/// Number of leading codes logged per parsed file
pub const CODES_LOGGED_PER_FILE: usize = 10;

// =============================================================================
// Helper Functions
// =============================================================================

/// Normalize a section value for placeholder comparison: lower-case with
/// any trailing period removed
pub fn marker_key(value: &str) -> String {
    value.to_lowercase().trim_end_matches('.').to_string()
}

/// Check whether a section value is a non-informative placeholder
pub fn is_empty_marker(value: &str) -> bool {
    let key = marker_key(value);
    EMPTY_MARKERS.iter().any(|marker| key.starts_with(marker))
}
