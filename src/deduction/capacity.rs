//! Capacity overflow check.

use crate::config::DeductionThresholds;
use crate::models::{DeductionRisk, RiskCategory, RiskLevel};

use super::CheckOutcome;

/// Stable code of the capacity overflow deduction.
pub const CAPACITY_OVERFLOW: &str = "CAPACITY_OVERFLOW";

/// Flags attendance above the licensed capacity for the reviewed date.
///
/// A missing enrollment count marks the check unknown.
pub fn check_capacity_overflow(
    capacity: u32,
    enrolled: Option<u32>,
    thresholds: &DeductionThresholds,
) -> CheckOutcome {
    let Some(enrolled) = enrolled else {
        return CheckOutcome::Unknown;
    };

    if enrolled <= capacity {
        return CheckOutcome::Compliant;
    }

    CheckOutcome::Risk(DeductionRisk {
        code: CAPACITY_OVERFLOW.to_string(),
        name: "Capacity overflow deduction".to_string(),
        description: "Attendance exceeds the licensed capacity".to_string(),
        level: RiskLevel::Critical,
        impact_rate: thresholds.capacity_impact,
        category: RiskCategory::Capacity,
        details: format!(
            "capacity {}, {} attending ({} over)",
            capacity,
            enrolled,
            enrolled - capacity
        ),
        recommendation: "Adjust bookings to stay within the licensed capacity".to_string(),
    })
}
