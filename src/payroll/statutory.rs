//! Statutory deductions: insurance premiums and tax approximations.

use rust_decimal::Decimal;

use crate::calculation::round_yen;
use crate::config::{IncomeTaxTable, PayrollRates};

/// Statutory deductions for one staff-month, each in whole yen.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryDeductions {
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
}

impl StatutoryDeductions {
    /// Sums all deductions.
    pub fn total(&self) -> Decimal {
        self.health_insurance
            + self.pension_insurance
            + self.employment_insurance
            + self.income_tax
            + self.resident_tax
    }
}

/// Calculates the statutory deductions on a gross pay amount.
///
/// Insurance premiums are flat percentages of gross pay. Income tax is a
/// monotonic step function of gross pay net of the insurance premiums,
/// approximating the monthly withholding table; resident tax approximates
/// one month's share of the annual rate on the same taxable base.
pub fn calculate_statutory_deductions(
    gross_pay: Decimal,
    rates: &PayrollRates,
) -> StatutoryDeductions {
    let health_insurance = round_yen(gross_pay * rates.insurance.health);
    let pension_insurance = round_yen(gross_pay * rates.insurance.pension);
    let employment_insurance = round_yen(gross_pay * rates.insurance.employment);

    let taxable = gross_pay - health_insurance - pension_insurance - employment_insurance;
    let income_tax = round_yen(monthly_income_tax(taxable, &rates.income_tax));
    let resident_tax = round_yen(
        taxable * rates.resident_tax.annual_rate / Decimal::from(rates.resident_tax.months),
    );

    StatutoryDeductions {
        health_insurance,
        pension_insurance,
        employment_insurance,
        income_tax,
        resident_tax,
    }
}

/// Evaluates the withholding table approximation at a taxable amount.
///
/// Walks the brackets in order and applies the first whose upper bound
/// covers the amount: `base + (taxable - floor) * rate`. Non-positive
/// taxable income owes nothing.
pub fn monthly_income_tax(taxable: Decimal, table: &IncomeTaxTable) -> Decimal {
    if taxable <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    for bracket in &table.brackets {
        let covers = match bracket.up_to {
            Some(limit) => taxable <= limit,
            None => true,
        };
        if covers {
            return bracket.base + (taxable - bracket.floor) * bracket.rate;
        }
    }
    Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InsuranceRates, PremiumRates, ResidentTaxRates, TaxBracket};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn table() -> IncomeTaxTable {
        IncomeTaxTable {
            brackets: vec![
                TaxBracket {
                    up_to: Some(dec("88000")),
                    base: dec("0"),
                    rate: dec("0"),
                    floor: dec("0"),
                },
                TaxBracket {
                    up_to: Some(dec("162500")),
                    base: dec("0"),
                    rate: dec("0.05"),
                    floor: dec("88000"),
                },
                TaxBracket {
                    up_to: Some(dec("275000")),
                    base: dec("3730"),
                    rate: dec("0.1"),
                    floor: dec("162500"),
                },
                TaxBracket {
                    up_to: Some(dec("579167")),
                    base: dec("14980"),
                    rate: dec("0.2"),
                    floor: dec("275000"),
                },
                TaxBracket {
                    up_to: None,
                    base: dec("75813"),
                    rate: dec("0.23"),
                    floor: dec("579167"),
                },
            ],
        }
    }

    fn rates() -> PayrollRates {
        PayrollRates {
            premiums: PremiumRates {
                overtime: dec("1.25"),
                late_night: dec("1.5"),
                holiday: dec("1.35"),
            },
            standard_daily_hours: dec("8"),
            insurance: InsuranceRates {
                health: dec("0.05"),
                pension: dec("0.0915"),
                employment: dec("0.006"),
                employer_health: dec("0.05"),
                employer_pension: dec("0.0915"),
                employer_employment: dec("0.0095"),
                workers_comp: dec("0.003"),
            },
            income_tax: table(),
            resident_tax: ResidentTaxRates {
                annual_rate: dec("0.1"),
                months: 12,
            },
        }
    }

    #[test]
    fn test_income_below_first_bracket_owes_nothing() {
        assert_eq!(monthly_income_tax(dec("80000"), &table()), Decimal::ZERO);
    }

    #[test]
    fn test_income_in_second_bracket() {
        // (100000 - 88000) x 0.05 = 600.
        assert_eq!(monthly_income_tax(dec("100000"), &table()), dec("600"));
    }

    #[test]
    fn test_income_in_third_bracket() {
        // 3730 + (200000 - 162500) x 0.1 = 7480.
        assert_eq!(monthly_income_tax(dec("200000"), &table()), dec("7480"));
    }

    #[test]
    fn test_income_in_open_top_bracket() {
        // 75813 + (600000 - 579167) x 0.23 = 80604.59.
        assert_eq!(monthly_income_tax(dec("600000"), &table()), dec("80604.59"));
    }

    #[test]
    fn test_tax_is_monotonic_across_bracket_edges() {
        let edges = ["87999", "88000", "88001", "162500", "162501", "275000", "275001"];
        let mut previous = Decimal::MIN;
        for edge in edges {
            let tax = monthly_income_tax(dec(edge), &table());
            assert!(
                tax >= previous,
                "tax decreased at taxable {}: {} < {}",
                edge,
                tax,
                previous
            );
            previous = tax;
        }
    }

    #[test]
    fn test_negative_taxable_owes_nothing() {
        assert_eq!(monthly_income_tax(dec("-100"), &table()), Decimal::ZERO);
    }

    #[test]
    fn test_insurance_premiums_are_flat_percentages() {
        let deductions = calculate_statutory_deductions(dec("280000"), &rates());

        assert_eq!(deductions.health_insurance, dec("14000"));
        assert_eq!(deductions.pension_insurance, dec("25620"));
        assert_eq!(deductions.employment_insurance, dec("1680"));
    }

    #[test]
    fn test_taxes_use_gross_net_of_insurance() {
        let deductions = calculate_statutory_deductions(dec("280000"), &rates());

        // taxable = 280000 - 14000 - 25620 - 1680 = 238700.
        // income tax = 3730 + (238700 - 162500) x 0.1 = 11350.
        assert_eq!(deductions.income_tax, dec("11350"));
        // resident tax = 238700 x 0.1 / 12 = 1989.17 -> 1989.
        assert_eq!(deductions.resident_tax, dec("1989"));
    }

    #[test]
    fn test_total_sums_all_deductions() {
        let deductions = calculate_statutory_deductions(dec("280000"), &rates());
        assert_eq!(deductions.total(), dec("54639"));
    }
}
