//! Risk tier grading from health-risk free text
//!
//! Pure function over a record's final health-risk text. Must run exactly
//! once per record, after every continuation line has been absorbed.

use crate::app::models::RiskLevel;
use crate::constants::{HIGH_RISK_KEYWORDS, MODERATE_RISK_KEYWORDS};

/// Grade health-risk text into a severity tier.
///
/// Keyword checks are substring matches against the lower-cased text.
/// The HIGH tier is checked before MODERATE, so text matching both
/// tiers grades HIGH.
pub fn classify_health_risks(health_risks: &str) -> RiskLevel {
    let text = health_risks.to_lowercase();
    if text.is_empty() {
        return RiskLevel::Unknown;
    }
    if HIGH_RISK_KEYWORDS.iter().any(|k| text.contains(k)) {
        return RiskLevel::High;
    }
    if MODERATE_RISK_KEYWORDS.iter().any(|k| text.contains(k)) {
        return RiskLevel::Moderate;
    }
    RiskLevel::Low
}
