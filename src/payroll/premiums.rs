//! Premium pay off the hourly-equivalent base.

use rust_decimal::Decimal;

use crate::calculation::round_yen;
use crate::config::PremiumRates;
use crate::models::PayrollInput;

/// Premium pay lines for one staff-month, each in whole yen.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumPay {
    /// Overtime premium pay.
    pub overtime_pay: Decimal,
    /// Late-night premium pay.
    pub late_night_pay: Decimal,
    /// Holiday premium pay.
    pub holiday_pay: Decimal,
}

impl PremiumPay {
    /// Sums the premium lines.
    pub fn total(&self) -> Decimal {
        self.overtime_pay + self.late_night_pay + self.holiday_pay
    }
}

/// Applies the premium multipliers to the hourly-equivalent base.
///
/// Each line is `hourly_base x hours x multiplier`, rounded to whole yen
/// independently, matching how the lines appear on a pay slip.
pub fn calculate_premiums(
    hourly_base: Decimal,
    input: &PayrollInput,
    rates: &PremiumRates,
) -> PremiumPay {
    PremiumPay {
        overtime_pay: round_yen(hourly_base * input.overtime_hours * rates.overtime),
        late_night_pay: round_yen(hourly_base * input.late_night_hours * rates.late_night),
        holiday_pay: round_yen(hourly_base * input.holiday_hours * rates.holiday),
    }
}
