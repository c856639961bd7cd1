//! Calculation logic for the reimbursement engine.
//!
//! This module contains the addition pipeline: full-time-equivalent
//! derivation, qualification classes, roster aggregates, the catalog
//! eligibility judge, exclusive-group selection, the monthly revenue
//! simulator, and the optimization advisor.

mod advisor;
mod eligibility;
mod exclusive_group;
mod fte;
mod profile;
mod qualifications;
mod revenue;

pub use advisor::{Suggestion, SuggestionKind, SuggestionPriority, advise};
pub use eligibility::judge_catalog;
pub use exclusive_group::select_claimable;
pub use fte::calculate_fte;
pub use profile::RosterProfile;
pub use qualifications::QualificationClass;
pub use revenue::{round_yen, simulate_monthly_revenue};
