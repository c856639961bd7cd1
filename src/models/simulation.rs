//! Revenue simulation parameters and results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AdditionJudgment;

/// Scenario parameters for a monthly revenue simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of enrolled children in the scenario.
    pub child_count: u32,
    /// Average usage days per child per month.
    pub average_usage_days: Decimal,
    /// Base reimbursement units per child-day.
    pub base_units: Decimal,
    /// Region grade (1-8) used to look up the unit price.
    pub region_grade: u8,
    /// Sum of the percent rates of claimed percent-valued additions.
    #[serde(default)]
    pub percent_addition_rate: Decimal,
    /// Monthly aggregate of per-occurrence implementation-addition units.
    #[serde(default)]
    pub implementation_units: Decimal,
}

/// A flat addition included in a simulation, with its unit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddition {
    /// The catalog code of the addition.
    pub code: String,
    /// The full display name.
    pub name: String,
    /// Units added per child-day.
    pub units: Decimal,
}

impl From<&AdditionJudgment> for SelectedAddition {
    fn from(judgment: &AdditionJudgment) -> Self {
        Self {
            code: judgment.code.clone(),
            name: judgment.name.clone(),
            units: judgment.units,
        }
    }
}

/// Monthly revenue split by source, each component in whole yen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBreakdown {
    /// Revenue from the base per-child-day units.
    pub base: Decimal,
    /// Revenue from claimed flat system additions.
    pub system_addition: Decimal,
    /// Revenue from percent-valued additions applied on top.
    pub percent_addition: Decimal,
    /// Revenue from implementation-addition units.
    pub implementation: Decimal,
}

impl RevenueBreakdown {
    /// Sums the components. Equals the simulation's total revenue exactly.
    pub fn total(&self) -> Decimal {
        self.base + self.system_addition + self.percent_addition + self.implementation
    }
}

/// The result of a monthly revenue simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Total monthly revenue in whole yen.
    pub total_revenue: Decimal,
    /// Revenue split by source.
    pub breakdown: RevenueBreakdown,
    /// Total revenue divided by child count, in whole yen.
    pub per_child_revenue: Decimal,
    /// The flat additions the scenario claims.
    pub selected: Vec<SelectedAddition>,
}
