//! Service manager absence check.

use crate::config::DeductionThresholds;
use crate::models::{DeductionRisk, RiskCategory, RiskLevel};

use super::CheckOutcome;

/// Stable code of the service manager absence deduction.
pub const SERVICE_MANAGER_ABSENT: &str = "SERVICE_MANAGER_ABSENT";

/// Flags a facility with no service manager holding an open assignment.
///
/// A missing assignment signal marks the check unknown.
pub fn check_service_manager(
    assigned: Option<bool>,
    thresholds: &DeductionThresholds,
) -> CheckOutcome {
    match assigned {
        None => CheckOutcome::Unknown,
        Some(true) => CheckOutcome::Compliant,
        Some(false) => CheckOutcome::Risk(DeductionRisk {
            code: SERVICE_MANAGER_ABSENT.to_string(),
            name: "Service manager absence deduction".to_string(),
            description: "No service manager is assigned".to_string(),
            level: RiskLevel::Critical,
            impact_rate: thresholds.service_manager_impact,
            category: RiskCategory::ServiceManager,
            details: "no staff member holds an open service manager assignment".to_string(),
            recommendation: "Assign a service manager and register the assignment".to_string(),
        }),
    }
}
