//! Deduction risk findings and the aggregated report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity of a deduction risk finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// The deduction applies now or on the next audit.
    Critical,
    /// The deduction is likely without corrective action.
    Warning,
    /// Informational; no reduction expected yet.
    Info,
}

impl RiskLevel {
    /// Sort rank, critical first.
    pub fn rank(self) -> u8 {
        match self {
            RiskLevel::Critical => 0,
            RiskLevel::Warning => 1,
            RiskLevel::Info => 2,
        }
    }
}

/// The regulatory area a deduction risk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    /// Enrollment above licensed capacity.
    Capacity,
    /// Missing or expired support plan documents.
    Plan,
    /// Staffing below the mandated placement standard.
    Personnel,
    /// Service manager not assigned.
    ServiceManager,
    /// Required disclosures not published.
    Disclosure,
}

/// A single detected deduction risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionRisk {
    /// Stable code identifying the check (e.g. "CAPACITY_OVERFLOW").
    pub code: String,
    /// The display name of the deduction.
    pub name: String,
    /// What the deduction penalizes.
    pub description: String,
    /// Severity of the finding.
    pub level: RiskLevel,
    /// The reduction applied if the deduction lands: the base rate is
    /// multiplied by this value, so `0.7` means "reduced to 70%".
    pub impact_rate: Decimal,
    /// The regulatory area of the finding.
    pub category: RiskCategory,
    /// What was observed, with concrete numbers.
    pub details: String,
    /// The corrective action to take.
    pub recommendation: String,
}

/// Counts per severity level plus the single worst applicable reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Number of critical findings.
    pub critical_count: usize,
    /// Number of warning findings.
    pub warning_count: usize,
    /// Number of informational findings.
    pub info_count: usize,
    /// The minimum impact rate across findings. The regulation applies the
    /// single worst applicable reduction, never a multiplicative stack.
    /// `None` when there are no findings.
    pub estimated_impact: Option<Decimal>,
}

/// The aggregated result of one deduction sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionReport {
    /// The reviewed date.
    pub date: NaiveDate,
    /// Findings sorted critical, then warning, then info.
    pub risks: Vec<DeductionRisk>,
    /// Codes of checks that could not run because their input signal was
    /// missing.
    pub unknown: Vec<String>,
    /// Counts per level plus the estimated impact.
    pub summary: RiskSummary,
}
