//! Self-evaluation disclosure check.

use crate::config::DeductionThresholds;
use crate::models::{DeductionRisk, RiskCategory, RiskLevel};

use super::CheckOutcome;

/// Stable code of the undisclosed self-evaluation deduction.
pub const SELF_EVALUATION_NOT_PUBLISHED: &str = "SELF_EVALUATION_NOT_PUBLISHED";

/// Flags a facility whose self-evaluation results are not published.
///
/// A missing disclosure signal marks the check unknown.
pub fn check_self_evaluation(
    published: Option<bool>,
    thresholds: &DeductionThresholds,
) -> CheckOutcome {
    match published {
        None => CheckOutcome::Unknown,
        Some(true) => CheckOutcome::Compliant,
        Some(false) => CheckOutcome::Risk(DeductionRisk {
            code: SELF_EVALUATION_NOT_PUBLISHED.to_string(),
            name: "Undisclosed self-evaluation deduction".to_string(),
            description: "Self-evaluation results are not published".to_string(),
            level: RiskLevel::Warning,
            impact_rate: thresholds.self_evaluation_impact,
            category: RiskCategory::Disclosure,
            details: "no published self-evaluation is on record".to_string(),
            recommendation: "Carry out the self-evaluation and publish the results".to_string(),
        }),
    }
}
