//! Facility snapshots consumed by the judgment and deduction pipelines.
//!
//! [`FacilitySnapshot`] carries the static facility parameters needed to
//! derive full-time-equivalent values and price units. [`OperationalSnapshot`]
//! carries the per-date compliance signals for the deduction risk detector;
//! every signal is independently optional, so a missing signal degrades only
//! the check that needs it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Static facility parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    /// The facility's standard full-time working week in hours. Must be
    /// positive.
    pub standard_weekly_hours: Decimal,
    /// The licensed capacity in children.
    pub capacity: u32,
    /// The region grade (1-8) used to look up the unit price.
    pub region_grade: u8,
}

impl FacilitySnapshot {
    /// Validates the snapshot fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFacility` if `standard_weekly_hours` is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.standard_weekly_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidFacility {
                field: "standard_weekly_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Plan coverage status for one enrolled child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPlanStatus {
    /// Unique identifier for the child.
    pub child_id: String,
    /// Display name, used in risk details.
    pub name: String,
    /// Whether the child has an active support plan document.
    pub has_active_plan: bool,
}

/// A precomputed daily staffing compliance record.
///
/// The hosting backend computes this from the day's shifts; the deduction
/// detector only reads the verdict fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStaffingSnapshot {
    /// Whether at least two base-roster staff were scheduled.
    pub has_two_staff: bool,
    /// Whether a fulltime dedicated staff member was scheduled.
    pub has_fulltime_dedicated: bool,
    /// Total full-time-equivalent value scheduled for the day.
    pub fte_total: Decimal,
}

/// Operational state for a reviewed date, as far as the caller could
/// assemble it.
///
/// Each field is independently optional: a `None` marks the corresponding
/// deduction check "unknown" rather than failing the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalSnapshot {
    /// The date under review.
    pub date: NaiveDate,
    /// Number of children attending on the reviewed date.
    pub enrolled_count: Option<u32>,
    /// Plan coverage for each active child.
    pub children: Option<Vec<ChildPlanStatus>>,
    /// The day's staffing compliance record.
    pub staffing: Option<DailyStaffingSnapshot>,
    /// Whether a service manager currently holds an open assignment.
    pub service_manager_assigned: Option<bool>,
    /// Whether the facility's self-evaluation results are published.
    pub self_evaluation_published: Option<bool>,
}

impl OperationalSnapshot {
    /// Creates a snapshot for the given date with every signal missing.
    ///
    /// Callers fill in the signals they were able to fetch.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            enrolled_count: None,
            children: None,
            staffing: None,
            service_manager_assigned: None,
            self_evaluation_published: None,
        }
    }
}
