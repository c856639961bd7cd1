//! Deduction risk detection.
//!
//! A fixed battery of independent, self-contained compliance checks over the
//! operational snapshot. Every check always runs, since risks can co-occur;
//! each returns compliant, one risk, or unknown when its input signal is
//! missing. The merged report sorts findings critical-first and rolls up the
//! single worst applicable reduction.

mod capacity;
mod self_evaluation;
mod service_manager;
mod staffing;
mod support_plan;

use tracing::debug;

use crate::config::DeductionThresholds;
use crate::models::{
    DeductionReport, DeductionRisk, FacilitySnapshot, OperationalSnapshot, RiskLevel, RiskSummary,
};

pub use capacity::{CAPACITY_OVERFLOW, check_capacity_overflow};
pub use self_evaluation::{SELF_EVALUATION_NOT_PUBLISHED, check_self_evaluation};
pub use service_manager::{SERVICE_MANAGER_ABSENT, check_service_manager};
pub use staffing::{STAFFING_SHORTAGE, check_staffing_shortage};
pub use support_plan::{SUPPORT_PLAN_MISSING, check_support_plan};

/// The result of one compliance check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The checked condition holds.
    Compliant,
    /// The checked condition fails; the finding describes how.
    Risk(DeductionRisk),
    /// The input signal for this check was missing.
    Unknown,
}

/// Runs every deduction check against the operational snapshot and merges
/// the findings into one report.
///
/// Findings are sorted critical, then warning, then info, preserving check
/// order within a level. The summary's estimated impact is the **minimum**
/// impact rate across findings: the regulation applies the single worst
/// applicable reduction, not a multiplicative stack.
pub fn run_deduction_check(
    facility: &FacilitySnapshot,
    snapshot: &OperationalSnapshot,
    thresholds: &DeductionThresholds,
) -> DeductionReport {
    let outcomes = [
        (
            CAPACITY_OVERFLOW,
            check_capacity_overflow(facility.capacity, snapshot.enrolled_count, thresholds),
        ),
        (
            SUPPORT_PLAN_MISSING,
            check_support_plan(snapshot.children.as_deref(), thresholds),
        ),
        (
            STAFFING_SHORTAGE,
            check_staffing_shortage(snapshot.staffing.as_ref(), thresholds),
        ),
        (
            SERVICE_MANAGER_ABSENT,
            check_service_manager(snapshot.service_manager_assigned, thresholds),
        ),
        (
            SELF_EVALUATION_NOT_PUBLISHED,
            check_self_evaluation(snapshot.self_evaluation_published, thresholds),
        ),
    ];

    let mut risks = Vec::new();
    let mut unknown = Vec::new();
    for (code, outcome) in outcomes {
        match outcome {
            CheckOutcome::Compliant => {}
            CheckOutcome::Risk(risk) => risks.push(risk),
            CheckOutcome::Unknown => unknown.push(code.to_string()),
        }
    }

    risks.sort_by_key(|r| r.level.rank());
    let summary = summarize(&risks);

    debug!(
        date = %snapshot.date,
        findings = risks.len(),
        unknown = unknown.len(),
        "ran deduction check"
    );

    DeductionReport {
        date: snapshot.date,
        risks,
        unknown,
        summary,
    }
}

fn summarize(risks: &[DeductionRisk]) -> RiskSummary {
    let count = |level: RiskLevel| risks.iter().filter(|r| r.level == level).count();
    RiskSummary {
        critical_count: count(RiskLevel::Critical),
        warning_count: count(RiskLevel::Warning),
        info_count: count(RiskLevel::Info),
        estimated_impact: risks.iter().map(|r| r.impact_rate).min(),
    }
}
