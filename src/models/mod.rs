//! Core data models for the reimbursement engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Callers map their loosely-typed store records into these structs once at
//! the boundary; the judgment, deduction, and payroll cores only ever
//! consume already-validated values.

mod deduction;
mod facility;
mod judgment;
mod payroll;
mod simulation;
mod staff;

pub use deduction::{DeductionReport, DeductionRisk, RiskCategory, RiskLevel, RiskSummary};
pub use facility::{
    ChildPlanStatus, DailyStaffingSnapshot, FacilitySnapshot, OperationalSnapshot,
};
pub use judgment::{AdditionCategory, AdditionJudgment, JudgmentStatus, RequirementStatus};
pub use payroll::{PayrollInput, PayrollResult, PayrollSummary};
pub use simulation::{RevenueBreakdown, SelectedAddition, SimulationParams, SimulationResult};
pub use staff::{PersonnelType, Roster, RosterMember, StaffRecord, WorkStyle};
