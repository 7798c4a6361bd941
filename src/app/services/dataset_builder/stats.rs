//! Build statistics for reporting

/// Counters accumulated across one dataset build
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Source files successfully parsed
    pub files_parsed: usize,
    /// Source files skipped (missing or oversized)
    pub files_skipped: usize,
    /// Candidate records before deduplication
    pub records_parsed: usize,
    /// Unclassifiable lines dropped during parsing
    pub dropped_lines: usize,
    /// Duplicate candidates resolved by the merger
    pub duplicates_removed: usize,
    /// Records in the finalized dataset
    pub records_final: usize,
    /// Expected codes absent after the build
    pub missing_expected: Vec<String>,
}

impl BuildStats {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} records from {} files ({} skipped, {} duplicates resolved)",
            self.records_final, self.files_parsed, self.files_skipped, self.duplicates_removed
        )
    }
}
