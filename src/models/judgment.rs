//! Addition judgment results.
//!
//! Each catalog definition judges to exactly one [`AdditionJudgment`],
//! whether or not the facility currently claims it, so the output always
//! distinguishes "achievable" from "already enabled".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reimbursement category of an addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionCategory {
    /// Earned through staffing composition; paid per child-day while the
    /// structure is in place.
    System,
    /// Earned per delivered service occurrence; enters the simulation as a
    /// monthly unit aggregate.
    Implementation,
}

/// Whether an addition's eligibility rule currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JudgmentStatus {
    /// Every condition of the rule holds.
    Met,
    /// The primary condition holds but a graduated sub-condition does not.
    Partial,
    /// The primary condition is absent entirely.
    Unmet,
}

/// The fulfilment state of one sub-condition of a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementStatus {
    /// What the sub-condition requires, in display form.
    pub name: String,
    /// Whether the sub-condition currently holds.
    pub met: bool,
    /// The current value, formatted for display.
    pub current: String,
    /// The required value, formatted for display.
    pub required: String,
    /// Optional elaboration on how the sub-condition is evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The judgment of a single catalog definition against a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionJudgment {
    /// The catalog code of the judged addition.
    pub code: String,
    /// The full display name.
    pub name: String,
    /// The short tier label for compact display.
    pub tier_label: String,
    /// The reimbursement category.
    pub category: AdditionCategory,
    /// Whether the eligibility rule currently holds.
    pub status: JudgmentStatus,
    /// Names the failing sub-condition, or summarizes fulfilment.
    pub reason: String,
    /// Per-sub-condition fulfilment detail.
    pub requirements: Vec<RequirementStatus>,
    /// Unit value added per child-day when claimed. Zero for percent-valued
    /// additions.
    pub units: Decimal,
    /// Percent rate for percent-valued additions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_rate: Option<Decimal>,
    /// The mutual-exclusivity tag, if this addition competes in a tier group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_group: Option<String>,
    /// Whether the caller reports this addition as currently enabled.
    pub currently_enabled: bool,
}

impl AdditionJudgment {
    /// Returns true if the eligibility rule fully holds.
    pub fn is_met(&self) -> bool {
        self.status == JudgmentStatus::Met
    }
}
