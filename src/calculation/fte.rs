//! Full-time-equivalent calculation.

use rust_decimal::Decimal;

use crate::models::WorkStyle;

/// Converts a staff work pattern into a fractional full-time-equivalent
/// value.
///
/// Fulltime staff always count as exactly 1.0. Part-time staff count as
/// their contracted weekly hours over the facility's standard weekly hours,
/// capped at 1.0 regardless of overtime; non-positive contracted hours
/// yield 0.
///
/// Negative contracted hours and non-positive standard hours are malformed
/// input and are rejected earlier, by [`Roster::build`] and
/// [`FacilitySnapshot::validate`]; this function is total over the validated
/// domain.
///
/// [`Roster::build`]: crate::models::Roster::build
/// [`FacilitySnapshot::validate`]: crate::models::FacilitySnapshot::validate
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::calculate_fte;
/// use reimbursement_engine::models::WorkStyle;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let fte = calculate_fte(
///     WorkStyle::Parttime,
///     Decimal::from(20),
///     Decimal::from(40),
/// );
/// assert_eq!(fte, Decimal::from_str("0.5").unwrap());
/// ```
pub fn calculate_fte(
    work_style: WorkStyle,
    contracted_weekly_hours: Decimal,
    standard_weekly_hours: Decimal,
) -> Decimal {
    if work_style == WorkStyle::Fulltime {
        return Decimal::ONE;
    }
    if contracted_weekly_hours <= Decimal::ZERO || standard_weekly_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (contracted_weekly_hours / standard_weekly_hours).min(Decimal::ONE)
}
