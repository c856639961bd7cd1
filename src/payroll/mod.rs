//! Payroll calculation for staff-months.
//!
//! A pure pipeline over per-staff time and allowance records: base pay,
//! premium pay off an hourly-equivalent base, statutory deductions, and a
//! facility-month aggregate carrying the employer-side statutory burden.

mod premiums;
mod statutory;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::round_yen;
use crate::config::PayrollRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollInput, PayrollResult, PayrollSummary, WorkStyle};

pub use premiums::{PremiumPay, calculate_premiums};
pub use statutory::{StatutoryDeductions, calculate_statutory_deductions, monthly_income_tax};

/// Calculates gross pay, statutory deductions, and net pay for one
/// staff-month.
///
/// Fulltime base pay is the monthly salary prorated over attended scheduled
/// days; part-time base pay is wage times hours. Premiums apply to an
/// hourly-equivalent base: the salary spread over scheduled working hours
/// for fulltime staff, the wage itself for part-time staff. Every pay and
/// deduction line is rounded to whole yen independently, so the result's
/// components reconcile exactly.
///
/// # Errors
///
/// Returns `InvalidPayrollInput` for a fulltime record without a salary, a
/// part-time record without a wage, zero scheduled days on a fulltime
/// record, more absences than scheduled days, or negative hours.
pub fn calculate_payroll(input: &PayrollInput, rates: &PayrollRates) -> EngineResult<PayrollResult> {
    validate_input(input)?;

    let (base_pay, hourly_base) = match input.work_style {
        WorkStyle::Fulltime => {
            let salary = input.monthly_salary.unwrap_or(Decimal::ZERO);
            let scheduled = Decimal::from(input.scheduled_days);
            let attended = scheduled - Decimal::from(input.absent_days);
            let base = salary * attended / scheduled;
            let hourly = salary / (scheduled * rates.standard_daily_hours);
            (base, hourly)
        }
        WorkStyle::Parttime => {
            let wage = input.hourly_wage.unwrap_or(Decimal::ZERO);
            (wage * input.total_hours, wage)
        }
    };
    let base_pay = round_yen(base_pay);

    let premiums = calculate_premiums(hourly_base, input, &rates.premiums);

    let commuting_allowance = input.commuting_allowance.unwrap_or(Decimal::ZERO);
    let position_allowance = input.position_allowance.unwrap_or(Decimal::ZERO);
    let qualification_allowance = input.qualification_allowance.unwrap_or(Decimal::ZERO);
    let other_allowances = input.other_allowances.unwrap_or(Decimal::ZERO);

    let gross_pay = base_pay
        + premiums.total()
        + commuting_allowance
        + position_allowance
        + qualification_allowance
        + other_allowances;

    let deductions = calculate_statutory_deductions(gross_pay, rates);
    let total_deductions = deductions.total();
    let net_pay = gross_pay - total_deductions;

    debug!(staff_id = %input.staff_id, gross = %gross_pay, net = %net_pay, "calculated payroll");

    Ok(PayrollResult {
        staff_id: input.staff_id.clone(),
        staff_name: input.staff_name.clone(),
        base_pay,
        overtime_pay: premiums.overtime_pay,
        late_night_pay: premiums.late_night_pay,
        holiday_pay: premiums.holiday_pay,
        commuting_allowance,
        position_allowance,
        qualification_allowance,
        other_allowances,
        gross_pay,
        health_insurance: deductions.health_insurance,
        pension_insurance: deductions.pension_insurance,
        employment_insurance: deductions.employment_insurance,
        income_tax: deductions.income_tax,
        resident_tax: deductions.resident_tax,
        total_deductions,
        net_pay,
    })
}

/// Calculates every staff payroll and the facility-month aggregate.
///
/// Total labor cost is the gross pay total plus the employer-side statutory
/// burden, reported separately from the net pay total.
///
/// # Errors
///
/// Propagates the first `InvalidPayrollInput` encountered.
pub fn calculate_payroll_summary(
    year: i32,
    month: u32,
    inputs: &[PayrollInput],
    rates: &PayrollRates,
) -> EngineResult<PayrollSummary> {
    let mut staff_payrolls = Vec::with_capacity(inputs.len());
    for input in inputs {
        staff_payrolls.push(calculate_payroll(input, rates)?);
    }

    let total_gross_pay: Decimal = staff_payrolls.iter().map(|p| p.gross_pay).sum();
    let total_deductions: Decimal = staff_payrolls.iter().map(|p| p.total_deductions).sum();
    let total_net_pay: Decimal = staff_payrolls.iter().map(|p| p.net_pay).sum();
    let employer_burden = total_gross_pay * rates.insurance.employer_burden_rate();
    let total_labor_cost = round_yen(total_gross_pay + employer_burden);

    debug!(
        year,
        month,
        staff = staff_payrolls.len(),
        labor_cost = %total_labor_cost,
        "calculated payroll summary"
    );

    Ok(PayrollSummary {
        year,
        month,
        staff_payrolls,
        total_gross_pay,
        total_deductions,
        total_net_pay,
        total_labor_cost,
    })
}

fn validate_input(input: &PayrollInput) -> EngineResult<()> {
    let invalid = |message: &str| EngineError::InvalidPayrollInput {
        staff_id: input.staff_id.clone(),
        message: message.to_string(),
    };

    match input.work_style {
        WorkStyle::Fulltime => {
            if input.monthly_salary.is_none() {
                return Err(invalid("fulltime staff require monthly_salary"));
            }
            if input.scheduled_days == 0 {
                return Err(invalid("scheduled_days must be positive for fulltime staff"));
            }
            if input.absent_days > input.scheduled_days {
                return Err(invalid("absent_days cannot exceed scheduled_days"));
            }
        }
        WorkStyle::Parttime => {
            if input.hourly_wage.is_none() {
                return Err(invalid("part-time staff require hourly_wage"));
            }
        }
    }

    let hours = [
        ("total_hours", input.total_hours),
        ("overtime_hours", input.overtime_hours),
        ("late_night_hours", input.late_night_hours),
        ("holiday_hours", input.holiday_hours),
    ];
    for (field, value) in hours {
        if value < Decimal::ZERO {
            return Err(invalid(&format!("{} cannot be negative", field)));
        }
    }

    Ok(())
}
