//! Cross-file record deduplication
//!
//! Candidate records arrive in file-processing order and are grouped by
//! code. For each code exactly one record survives: the one with the
//! highest richness score (count of non-empty descriptive fields). An
//! exact tie keeps the candidate encountered first - the strict `>`
//! comparison below is the contract, not an accident.

use crate::app::models::Additive;
use std::collections::HashMap;
use tracing::{debug, info};

/// Merge candidate records by code, keeping the richer record per code.
///
/// Output preserves first-encounter order of codes; final ordering is
/// applied later during finalization.
pub fn deduplicate_records(candidates: Vec<Additive>) -> Vec<Additive> {
    let candidate_count = candidates.len();
    let mut winners: Vec<Additive> = Vec::with_capacity(candidate_count);
    let mut position_by_code: HashMap<String, usize> = HashMap::new();

    for candidate in candidates {
        match position_by_code.get(&candidate.code) {
            Some(&position) => {
                let incumbent = &winners[position];
                if candidate.richness_score() > incumbent.richness_score() {
                    debug!(
                        "Replacing {} (richness {} -> {})",
                        candidate.code,
                        incumbent.richness_score(),
                        candidate.richness_score()
                    );
                    winners[position] = candidate;
                }
            }
            None => {
                position_by_code.insert(candidate.code.clone(), winners.len());
                winners.push(candidate);
            }
        }
    }

    let duplicates = candidate_count - winners.len();
    if duplicates > 0 {
        info!(
            "Deduplication complete: {} duplicate candidates resolved, {} records remaining",
            duplicates,
            winners.len()
        );
    }

    winners
}
