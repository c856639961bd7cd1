//! Payroll inputs and results for one staff-month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WorkStyle;

/// Time and allowance inputs for one staff member for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Unique identifier for the staff member.
    pub staff_id: String,
    /// Display name.
    pub staff_name: String,
    /// Whether the member is paid monthly (fulltime) or hourly (part-time).
    pub work_style: WorkStyle,
    /// Monthly base salary. Required for fulltime staff.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// Hourly wage. Required for part-time staff.
    #[serde(default)]
    pub hourly_wage: Option<Decimal>,
    /// Scheduled working days in the month.
    pub scheduled_days: u32,
    /// Days actually worked.
    pub actual_days: u32,
    /// Total hours worked. The pay base for part-time staff.
    pub total_hours: Decimal,
    /// Hours worked beyond schedule.
    pub overtime_hours: Decimal,
    /// Hours worked late at night.
    pub late_night_hours: Decimal,
    /// Hours worked on holidays.
    pub holiday_hours: Decimal,
    /// Paid leave days taken.
    pub paid_leave_days: u32,
    /// Unpaid absence days. Deducted pro rata from fulltime salary.
    pub absent_days: u32,
    /// Commuting allowance in yen.
    #[serde(default)]
    pub commuting_allowance: Option<Decimal>,
    /// Position allowance in yen.
    #[serde(default)]
    pub position_allowance: Option<Decimal>,
    /// Qualification allowance in yen.
    #[serde(default)]
    pub qualification_allowance: Option<Decimal>,
    /// Any other allowances in yen.
    #[serde(default)]
    pub other_allowances: Option<Decimal>,
}

/// Gross pay, statutory deductions, and net pay for one staff-month.
///
/// All amounts are whole yen. `gross_pay` equals the sum of the pay
/// components, and `net_pay` equals `gross_pay - total_deductions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Unique identifier for the staff member.
    pub staff_id: String,
    /// Display name.
    pub staff_name: String,
    /// Base pay after absence deduction (fulltime) or wage times hours
    /// (part-time).
    pub base_pay: Decimal,
    /// Overtime premium pay.
    pub overtime_pay: Decimal,
    /// Late-night premium pay.
    pub late_night_pay: Decimal,
    /// Holiday premium pay.
    pub holiday_pay: Decimal,
    /// Commuting allowance.
    pub commuting_allowance: Decimal,
    /// Position allowance.
    pub position_allowance: Decimal,
    /// Qualification allowance.
    pub qualification_allowance: Decimal,
    /// Other allowances.
    pub other_allowances: Decimal,
    /// Total gross pay.
    pub gross_pay: Decimal,
    /// Employee-side health insurance premium.
    pub health_insurance: Decimal,
    /// Employee-side pension insurance premium.
    pub pension_insurance: Decimal,
    /// Employee-side employment insurance premium.
    pub employment_insurance: Decimal,
    /// Estimated monthly withholding income tax.
    pub income_tax: Decimal,
    /// Estimated monthly resident tax.
    pub resident_tax: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Take-home pay.
    pub net_pay: Decimal,
}

/// The facility-month payroll aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The payroll year.
    pub year: i32,
    /// The payroll month (1-12).
    pub month: u32,
    /// Per-staff results in input order.
    pub staff_payrolls: Vec<PayrollResult>,
    /// Sum of gross pay across staff.
    pub total_gross_pay: Decimal,
    /// Sum of deductions across staff.
    pub total_deductions: Decimal,
    /// Sum of net pay across staff.
    pub total_net_pay: Decimal,
    /// Gross pay plus the employer-side statutory burden, in whole yen.
    pub total_labor_cost: Decimal,
}
