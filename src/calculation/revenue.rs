//! Monthly revenue simulation.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::AdditionCatalog;
use crate::error::{EngineError, EngineResult};
use crate::models::{RevenueBreakdown, SelectedAddition, SimulationParams, SimulationResult};

/// Rounds an amount to whole yen, half away from zero.
pub fn round_yen(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Simulates one month of revenue under the given scenario.
///
/// Each breakdown component is scaled through the same
/// unit-price/usage-days/child-count chain and rounded to whole yen exactly
/// once; the total is the sum of the rounded components, so the breakdown
/// always reconciles to the total without drift.
///
/// # Errors
///
/// Returns `InvalidSimulation` for negative scenario parameters and
/// `UnitPriceNotFound` for an unconfigured region grade.
pub fn simulate_monthly_revenue(
    params: &SimulationParams,
    selected: &[SelectedAddition],
    catalog: &AdditionCatalog,
) -> EngineResult<SimulationResult> {
    validate_params(params)?;
    let unit_price = catalog.unit_price(params.region_grade)?;

    let usage_days = Decimal::from(params.child_count) * params.average_usage_days;
    let system_units: Decimal = selected.iter().map(|s| s.units).sum();

    let base = params.base_units * usage_days * unit_price;
    let system_addition = system_units * usage_days * unit_price;
    let percent_addition =
        (base + system_addition) * params.percent_addition_rate / Decimal::ONE_HUNDRED;
    let implementation = params.implementation_units * unit_price;

    let breakdown = RevenueBreakdown {
        base: round_yen(base),
        system_addition: round_yen(system_addition),
        percent_addition: round_yen(percent_addition),
        implementation: round_yen(implementation),
    };
    let total_revenue = breakdown.total();
    let per_child_revenue = if params.child_count > 0 {
        round_yen(total_revenue / Decimal::from(params.child_count))
    } else {
        Decimal::ZERO
    };

    debug!(
        total = %total_revenue,
        children = params.child_count,
        "simulated monthly revenue"
    );

    Ok(SimulationResult {
        total_revenue,
        breakdown,
        per_child_revenue,
        selected: selected.to_vec(),
    })
}

fn validate_params(params: &SimulationParams) -> EngineResult<()> {
    let checks = [
        ("average_usage_days", params.average_usage_days),
        ("base_units", params.base_units),
        ("percent_addition_rate", params.percent_addition_rate),
        ("implementation_units", params.implementation_units),
    ];
    for (field, value) in checks {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidSimulation {
                field: field.to_string(),
                message: "cannot be negative".to_string(),
            });
        }
    }
    Ok(())
}
