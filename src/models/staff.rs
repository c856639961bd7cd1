//! Staff models and the validated roster.
//!
//! This module defines the [`StaffRecord`] struct as supplied by the caller's
//! data store, together with the [`Roster`] type produced by validating those
//! records against a facility snapshot. The judgment core only ever consumes
//! a `Roster`, so malformed input is rejected once, at the boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_fte;
use crate::error::{EngineError, EngineResult};

use super::FacilitySnapshot;

/// Represents the working arrangement of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    /// Full-time employment; always counts as 1.0 full-time equivalent.
    Fulltime,
    /// Part-time employment; counts pro rata against the facility's
    /// standard weekly hours.
    Parttime,
}

/// Distinguishes mandated base-roster staff from surplus headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonnelType {
    /// Staff filling the mandated base staffing requirement.
    Standard,
    /// Surplus staff counted toward staffing-based additions.
    Addition,
}

/// A staff member as supplied by the caller's data store.
///
/// The engine assumes staff IDs are unique and does not re-validate
/// referential integrity; manager and service-manager distinctness is the
/// caller's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether this member fills the base roster or counts toward additions.
    pub personnel_type: PersonnelType,
    /// The working arrangement.
    pub work_style: WorkStyle,
    /// Contracted weekly working hours. Ignored for fulltime staff.
    pub contracted_weekly_hours: Decimal,
    /// Whether this member is the facility manager.
    #[serde(default)]
    pub is_manager: bool,
    /// Whether this member is the service manager.
    #[serde(default)]
    pub is_service_manager: bool,
    /// Qualification codes held (e.g. "nursery_teacher", "pt").
    #[serde(default)]
    pub qualifications: Vec<String>,
    /// Years of relevant experience.
    #[serde(default)]
    pub years_of_experience: u32,
}

impl StaffRecord {
    /// Returns true if the member works fulltime.
    pub fn is_fulltime(&self) -> bool {
        self.work_style == WorkStyle::Fulltime
    }
}

/// A validated staff record with its derived full-time-equivalent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterMember {
    /// The underlying staff record.
    pub record: StaffRecord,
    /// The derived full-time-equivalent value, always in `[0, 1]`.
    pub fte: Decimal,
}

/// A roster of validated staff, ready for addition judgment.
///
/// Built once at the boundary via [`Roster::build`]; the judgment core never
/// sees raw [`StaffRecord`]s.
///
/// # Example
///
/// ```
/// use reimbursement_engine::models::{
///     FacilitySnapshot, PersonnelType, Roster, StaffRecord, WorkStyle,
/// };
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let facility = FacilitySnapshot {
///     standard_weekly_hours: Decimal::from(40),
///     capacity: 10,
///     region_grade: 6,
/// };
/// let staff = vec![StaffRecord {
///     id: "staff_001".to_string(),
///     name: "Sato".to_string(),
///     personnel_type: PersonnelType::Standard,
///     work_style: WorkStyle::Parttime,
///     contracted_weekly_hours: Decimal::from(20),
///     is_manager: false,
///     is_service_manager: false,
///     qualifications: vec![],
///     years_of_experience: 0,
/// }];
///
/// let roster = Roster::build(staff, &facility).unwrap();
/// assert_eq!(roster.members()[0].fte, Decimal::from_str("0.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    members: Vec<RosterMember>,
}

impl Roster {
    /// Validates staff records against the facility snapshot and derives
    /// each member's full-time-equivalent value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFacility` if the snapshot's standard weekly hours are
    /// not positive, or `InvalidStaff` if any record carries negative
    /// contracted hours.
    pub fn build(staff: Vec<StaffRecord>, facility: &FacilitySnapshot) -> EngineResult<Self> {
        facility.validate()?;

        let mut members = Vec::with_capacity(staff.len());
        for record in staff {
            if record.contracted_weekly_hours < Decimal::ZERO {
                return Err(EngineError::InvalidStaff {
                    staff_id: record.id.clone(),
                    message: "contracted_weekly_hours cannot be negative".to_string(),
                });
            }
            let fte = calculate_fte(
                record.work_style,
                record.contracted_weekly_hours,
                facility.standard_weekly_hours,
            );
            members.push(RosterMember { record, fte });
        }

        Ok(Self { members })
    }

    /// Returns the validated members in input order.
    pub fn members(&self) -> &[RosterMember] {
        &self.members
    }

    /// Returns the total full-time-equivalent value across all members.
    pub fn total_fte(&self) -> Decimal {
        self.members.iter().map(|m| m.fte).sum()
    }
}
