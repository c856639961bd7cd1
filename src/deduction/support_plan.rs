//! Missing support plan check.

use rust_decimal::Decimal;

use crate::config::DeductionThresholds;
use crate::models::{ChildPlanStatus, DeductionRisk, RiskCategory, RiskLevel};

use super::CheckOutcome;

/// Stable code of the missing support plan deduction.
pub const SUPPORT_PLAN_MISSING: &str = "SUPPORT_PLAN_MISSING";

/// Flags active children without an active support plan document.
///
/// Escalates to critical when the uncovered share reaches the configured
/// cutoff. A missing child list marks the check unknown; an empty list is
/// compliant.
pub fn check_support_plan(
    children: Option<&[ChildPlanStatus]>,
    thresholds: &DeductionThresholds,
) -> CheckOutcome {
    let Some(children) = children else {
        return CheckOutcome::Unknown;
    };
    if children.is_empty() {
        return CheckOutcome::Compliant;
    }

    let uncovered: Vec<&ChildPlanStatus> =
        children.iter().filter(|c| !c.has_active_plan).collect();
    if uncovered.is_empty() {
        return CheckOutcome::Compliant;
    }

    let share = Decimal::from(uncovered.len() as u64) / Decimal::from(children.len() as u64);
    let (level, impact_rate) = if share >= thresholds.plan_critical_share {
        (RiskLevel::Critical, thresholds.plan_critical_impact)
    } else {
        (RiskLevel::Warning, thresholds.plan_warning_impact)
    };

    let names: Vec<&str> = uncovered.iter().map(|c| c.name.as_str()).collect();
    CheckOutcome::Risk(DeductionRisk {
        code: SUPPORT_PLAN_MISSING.to_string(),
        name: "Missing support plan deduction".to_string(),
        description: "Active children lack an active support plan".to_string(),
        level,
        impact_rate,
        category: RiskCategory::Plan,
        details: format!(
            "{} of {} children without a plan ({})",
            uncovered.len(),
            children.len(),
            names.join(", ")
        ),
        recommendation: "Draw up support plans for the affected children promptly".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn thresholds() -> DeductionThresholds {
        DeductionThresholds {
            capacity_impact: Decimal::from_str("0.7").unwrap(),
            plan_critical_share: Decimal::from_str("0.5").unwrap(),
            plan_critical_impact: Decimal::from_str("0.5").unwrap(),
            plan_warning_impact: Decimal::from_str("0.7").unwrap(),
            staffing_impact: Decimal::from_str("0.7").unwrap(),
            staffing_min_fte: Decimal::from_str("2.0").unwrap(),
            service_manager_impact: Decimal::from_str("0.7").unwrap(),
            self_evaluation_impact: Decimal::from_str("0.85").unwrap(),
        }
    }

    fn child(name: &str, has_active_plan: bool) -> ChildPlanStatus {
        ChildPlanStatus {
            child_id: format!("child_{}", name),
            name: name.to_string(),
            has_active_plan,
        }
    }

    #[test]
    fn test_half_uncovered_is_critical() {
        let children = vec![
            child("Aoi", false),
            child("Ren", false),
            child("Mio", true),
            child("Yui", true),
        ];

        match check_support_plan(Some(&children), &thresholds()) {
            CheckOutcome::Risk(risk) => {
                assert_eq!(risk.level, RiskLevel::Critical);
                assert_eq!(risk.impact_rate, Decimal::from_str("0.5").unwrap());
                assert!(risk.details.contains("2 of 4"));
            }
            other => panic!("Expected a risk, got {:?}", other),
        }
    }

    #[test]
    fn test_minority_uncovered_is_warning() {
        let children = vec![child("Aoi", false), child("Ren", true), child("Mio", true)];

        match check_support_plan(Some(&children), &thresholds()) {
            CheckOutcome::Risk(risk) => {
                assert_eq!(risk.level, RiskLevel::Warning);
                assert_eq!(risk.impact_rate, Decimal::from_str("0.7").unwrap());
                assert!(risk.details.contains("Aoi"));
            }
            other => panic!("Expected a risk, got {:?}", other),
        }
    }

    #[test]
    fn test_full_coverage_is_compliant() {
        let children = vec![child("Aoi", true), child("Ren", true)];
        assert!(matches!(
            check_support_plan(Some(&children), &thresholds()),
            CheckOutcome::Compliant
        ));
    }

    #[test]
    fn test_no_children_is_compliant() {
        assert!(matches!(
            check_support_plan(Some(&[]), &thresholds()),
            CheckOutcome::Compliant
        ));
    }

    #[test]
    fn test_missing_child_list_is_unknown() {
        assert!(matches!(
            check_support_plan(None, &thresholds()),
            CheckOutcome::Unknown
        ));
    }
}
