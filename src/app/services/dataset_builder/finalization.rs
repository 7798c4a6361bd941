//! Ordering, name fallback, and sanity checks
//!
//! Sorts the deduplicated record set by (leading numeric code value, full
//! code string) ascending, grades each record, and falls back to the code
//! for records that never received a name. Idempotent: re-running over an
//! already finalized set changes nothing.

use super::grading::classify_health_risks;
use crate::app::models::Additive;
use crate::constants::EXPECTED_CODES;

/// Finalize the deduplicated record set in place
pub fn finalize_records(records: &mut [Additive]) {
    records.sort_by_key(|a| a.sort_key());

    for record in records.iter_mut() {
        record.risk_level = classify_health_risks(&record.health_risks);
        if record.name.is_empty() {
            record.name = record.code.clone();
        }
    }
}

/// Codes from the fixed expected set absent from the finalized records.
/// Absence is reported as a warning by the caller, never an abort.
pub fn missing_expected_codes(records: &[Additive]) -> Vec<String> {
    EXPECTED_CODES
        .iter()
        .filter(|code| !records.iter().any(|a| a.code == **code))
        .map(|code| code.to_string())
        .collect()
}
