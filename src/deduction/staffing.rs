//! Staffing shortage check.

use crate::config::DeductionThresholds;
use crate::models::{DailyStaffingSnapshot, DeductionRisk, RiskCategory, RiskLevel};

use super::CheckOutcome;

/// Stable code of the staffing shortage deduction.
pub const STAFFING_SHORTAGE: &str = "STAFFING_SHORTAGE";

/// Flags a day whose precomputed staffing compliance record fails the
/// placement standard.
///
/// The details list every failing sub-condition: the two-staff minimum, the
/// fulltime dedicated requirement, and the total FTE floor. A missing
/// staffing record marks the check unknown.
pub fn check_staffing_shortage(
    staffing: Option<&DailyStaffingSnapshot>,
    thresholds: &DeductionThresholds,
) -> CheckOutcome {
    let Some(staffing) = staffing else {
        return CheckOutcome::Unknown;
    };

    let mut failures = Vec::new();
    if !staffing.has_two_staff {
        failures.push("two-staff minimum not met".to_string());
    }
    if !staffing.has_fulltime_dedicated {
        failures.push("no fulltime dedicated staff scheduled".to_string());
    }
    if staffing.fte_total < thresholds.staffing_min_fte {
        failures.push(format!(
            "total FTE {} below {}",
            staffing.fte_total, thresholds.staffing_min_fte
        ));
    }

    if failures.is_empty() {
        return CheckOutcome::Compliant;
    }

    CheckOutcome::Risk(DeductionRisk {
        code: STAFFING_SHORTAGE.to_string(),
        name: "Staffing shortage deduction".to_string(),
        description: "The staffing placement standard is not met".to_string(),
        level: RiskLevel::Critical,
        impact_rate: thresholds.staffing_impact,
        category: RiskCategory::Personnel,
        details: failures.join("; "),
        recommendation: "Adjust shifts until the placement standard is met".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn thresholds() -> DeductionThresholds {
        DeductionThresholds {
            capacity_impact: dec("0.7"),
            plan_critical_share: dec("0.5"),
            plan_critical_impact: dec("0.5"),
            plan_warning_impact: dec("0.7"),
            staffing_impact: dec("0.7"),
            staffing_min_fte: dec("2.0"),
            service_manager_impact: dec("0.7"),
            self_evaluation_impact: dec("0.85"),
        }
    }

    fn snapshot(two: bool, dedicated: bool, fte: &str) -> DailyStaffingSnapshot {
        DailyStaffingSnapshot {
            has_two_staff: two,
            has_fulltime_dedicated: dedicated,
            fte_total: dec(fte),
        }
    }

    #[test]
    fn test_compliant_day_passes() {
        assert!(matches!(
            check_staffing_shortage(Some(&snapshot(true, true, "2.5")), &thresholds()),
            CheckOutcome::Compliant
        ));
    }

    #[test]
    fn test_single_failure_listed_in_details() {
        match check_staffing_shortage(Some(&snapshot(true, false, "2.5")), &thresholds()) {
            CheckOutcome::Risk(risk) => {
                assert_eq!(risk.level, RiskLevel::Critical);
                assert_eq!(risk.details, "no fulltime dedicated staff scheduled");
            }
            other => panic!("Expected a risk, got {:?}", other),
        }
    }

    #[test]
    fn test_all_failures_listed_in_details() {
        match check_staffing_shortage(Some(&snapshot(false, false, "1.5")), &thresholds()) {
            CheckOutcome::Risk(risk) => {
                assert!(risk.details.contains("two-staff minimum not met"));
                assert!(risk.details.contains("no fulltime dedicated staff scheduled"));
                assert!(risk.details.contains("total FTE 1.5 below 2.0"));
            }
            other => panic!("Expected a risk, got {:?}", other),
        }
    }

    #[test]
    fn test_fte_floor_is_inclusive() {
        assert!(matches!(
            check_staffing_shortage(Some(&snapshot(true, true, "2.0")), &thresholds()),
            CheckOutcome::Compliant
        ));
    }

    #[test]
    fn test_missing_record_is_unknown() {
        assert!(matches!(
            check_staffing_shortage(None, &thresholds()),
            CheckOutcome::Unknown
        ));
    }
}
