//! Configuration types for the addition catalog.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from the fiscal-year YAML files. A loaded
//! [`AdditionCatalog`] is immutable; a fiscal-year update constructs a whole
//! new catalog and swaps it atomically, never mutating one in place.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::calculation::QualificationClass;
use crate::error::{EngineError, EngineResult};
use crate::models::AdditionCategory;

/// Metadata about the fiscal-year catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMetadata {
    /// The fiscal year the catalog applies to (e.g. "2024").
    pub fiscal_year: String,
    /// The human-readable name of the catalog.
    pub name: String,
    /// The version or effective date of the catalog.
    pub version: String,
    /// URL to the official reimbursement notice.
    pub source_url: String,
}

/// Which roster slice a rule aggregates over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleScope {
    /// Every roster member.
    #[default]
    AllStaff,
    /// Only members registered as addition personnel.
    AdditionStaff,
}

/// An experience-based substitute for a qualification requirement.
///
/// A member without the rule's qualification still qualifies when they hold
/// a qualification of this class and meet the experience floor.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperiencedAlternative {
    /// The substitute qualification class.
    pub qualification: QualificationClass,
    /// Minimum years of experience for the substitute to apply.
    pub min_years: u32,
}

/// One branch of an [`EligibilityRule::AnyOfRatios`] rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatioCondition {
    /// Fulltime share of the whole roster must reach the threshold.
    FulltimeRate {
        /// Required percentage.
        min_percent: Decimal,
    },
    /// The share of fulltime `within`-class holders with the given tenure
    /// must reach the threshold.
    TenureRate {
        /// The qualification class whose fulltime holders form the
        /// denominator.
        within: QualificationClass,
        /// Minimum years of experience counted in the numerator.
        min_years: u32,
        /// Required percentage.
        min_percent: Decimal,
    },
}

/// The data-driven eligibility rule of an addition definition.
///
/// Rules with an experience floor are graduated: when the primary condition
/// holds but the floor does not, the judgment is `Partial` and the reason
/// names the failing sub-condition.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EligibilityRule {
    /// At least one fulltime member of the scope holds a qualification of
    /// the class (and meets the experience floor, if set).
    FulltimePresence {
        /// The required qualification class.
        qualification: QualificationClass,
        /// Optional experience floor in years; a graduated sub-condition.
        #[serde(default)]
        min_years_experience: Option<u32>,
        /// The roster slice judged.
        #[serde(default)]
        scope: RuleScope,
    },
    /// Aggregate full-time-equivalent value over matching scope members
    /// must reach the threshold.
    FteThreshold {
        /// The required aggregate FTE.
        min_fte: Decimal,
        /// Optional qualification filter; absent means every scope member
        /// counts.
        #[serde(default)]
        qualification: Option<QualificationClass>,
        /// Optional experience floor in years; a graduated sub-condition.
        #[serde(default)]
        min_years_experience: Option<u32>,
        /// Optional experience-based substitute for the qualification.
        #[serde(default)]
        experienced_alternative: Option<ExperiencedAlternative>,
        /// The roster slice judged.
        #[serde(default)]
        scope: RuleScope,
    },
    /// The share of fulltime `within`-class holders who also hold a
    /// `qualification`-class qualification must reach the threshold.
    QualifiedHeadcountRatio {
        /// The qualification class counted in the numerator.
        qualification: QualificationClass,
        /// The qualification class whose fulltime holders form the
        /// denominator.
        within: QualificationClass,
        /// Required percentage.
        min_percent: Decimal,
    },
    /// Met when any of the listed ratio conditions holds.
    AnyOfRatios {
        /// The alternative ratio conditions.
        ratios: Vec<RatioCondition>,
    },
}

/// One addition in the catalog, with its value and eligibility rule.
///
/// Exactly one of `units` and `percent_rate` must be present; the catalog
/// constructor rejects definitions carrying both or neither.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionDefinition {
    /// Stable code identifying the addition.
    pub code: String,
    /// The full display name.
    pub name: String,
    /// The short tier label for compact display.
    pub short_name: String,
    /// The reimbursement category.
    pub category: AdditionCategory,
    /// Unit value added per child-day, for flat additions.
    #[serde(default)]
    pub units: Option<Decimal>,
    /// Percent rate, for percent-valued additions.
    #[serde(default)]
    pub percent_rate: Option<Decimal>,
    /// The eligibility rule judged against the roster.
    pub rule: EligibilityRule,
    /// The mutual-exclusivity tag shared by competing tiers.
    #[serde(default)]
    pub exclusive_group: Option<String>,
}

/// Additions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct AdditionsConfig {
    /// Ordered addition definitions. Declaration order breaks ties in
    /// exclusive groups.
    pub additions: Vec<AdditionDefinition>,
}

/// Impact rates and cutoffs for the deduction checks.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionThresholds {
    /// Impact rate of the capacity overflow deduction.
    pub capacity_impact: Decimal,
    /// Share of uncovered children at which the missing-plan deduction
    /// escalates to critical.
    pub plan_critical_share: Decimal,
    /// Impact rate of the missing-plan deduction at critical severity.
    pub plan_critical_impact: Decimal,
    /// Impact rate of the missing-plan deduction at warning severity.
    pub plan_warning_impact: Decimal,
    /// Impact rate of the staffing shortage deduction.
    pub staffing_impact: Decimal,
    /// Minimum total FTE expected by the placement standard.
    pub staffing_min_fte: Decimal,
    /// Impact rate of the service manager absence deduction.
    pub service_manager_impact: Decimal,
    /// Impact rate of the undisclosed self-evaluation deduction.
    pub self_evaluation_impact: Decimal,
}

/// Unit price configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitPriceConfig {
    /// Yen per unit by region grade.
    pub unit_prices: HashMap<u8, Decimal>,
    /// Deduction impact rates and cutoffs.
    pub deduction: DeductionThresholds,
}

/// Premium multipliers applied to the hourly-equivalent pay base.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiumRates {
    /// Overtime multiplier.
    pub overtime: Decimal,
    /// Late-night multiplier.
    pub late_night: Decimal,
    /// Holiday multiplier.
    pub holiday: Decimal,
}

/// Statutory insurance rates as flat percentages of gross pay.
#[derive(Debug, Clone, Deserialize)]
pub struct InsuranceRates {
    /// Employee-side health insurance rate.
    pub health: Decimal,
    /// Employee-side pension insurance rate.
    pub pension: Decimal,
    /// Employee-side employment insurance rate.
    pub employment: Decimal,
    /// Employer-side health insurance rate.
    pub employer_health: Decimal,
    /// Employer-side pension insurance rate.
    pub employer_pension: Decimal,
    /// Employer-side employment insurance rate.
    pub employer_employment: Decimal,
    /// Workers' compensation rate, borne entirely by the employer.
    pub workers_comp: Decimal,
}

impl InsuranceRates {
    /// The combined employer-side statutory burden rate.
    pub fn employer_burden_rate(&self) -> Decimal {
        self.employer_health + self.employer_pension + self.employer_employment + self.workers_comp
    }
}

/// One bracket of the monthly withholding approximation.
///
/// Tax within a bracket is `base + (taxable - floor) * rate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of taxable income for this bracket; absent for the open
    /// top bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// Tax accumulated by the brackets below.
    pub base: Decimal,
    /// Marginal rate within this bracket.
    pub rate: Decimal,
    /// Lower bound the marginal rate applies from.
    pub floor: Decimal,
}

/// The monthly withholding table approximation.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxTable {
    /// Brackets in ascending order of `up_to`, ending with an open bracket.
    pub brackets: Vec<TaxBracket>,
}

/// Resident tax approximation parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ResidentTaxRates {
    /// Approximate annual rate on taxable income.
    pub annual_rate: Decimal,
    /// Months the annual amount is spread over.
    pub months: u32,
}

/// Payroll configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRates {
    /// Premium multipliers.
    pub premiums: PremiumRates,
    /// Assumed working hours per scheduled day, for the fulltime
    /// hourly-equivalent base.
    pub standard_daily_hours: Decimal,
    /// Statutory insurance rates.
    pub insurance: InsuranceRates,
    /// Income tax withholding approximation.
    pub income_tax: IncomeTaxTable,
    /// Resident tax approximation.
    pub resident_tax: ResidentTaxRates,
}

/// The complete fiscal-year catalog loaded from YAML files.
///
/// This struct aggregates the addition definitions, unit price table,
/// deduction thresholds, and payroll rates for one fiscal period.
#[derive(Debug, Clone)]
pub struct AdditionCatalog {
    /// Catalog metadata.
    metadata: CatalogMetadata,
    /// Ordered addition definitions.
    additions: Vec<AdditionDefinition>,
    /// Yen per unit by region grade.
    unit_prices: HashMap<u8, Decimal>,
    /// Deduction impact rates and cutoffs.
    deduction: DeductionThresholds,
    /// Payroll premium and statutory rates.
    payroll: PayrollRates,
}

impl AdditionCatalog {
    /// Creates a catalog from its component parts, validating the addition
    /// definitions once.
    ///
    /// # Errors
    ///
    /// Returns `CatalogInvalid` if a code appears twice, or a definition
    /// carries both or neither of a unit value and a percent rate, or a
    /// negative value.
    pub fn new(
        metadata: CatalogMetadata,
        additions: Vec<AdditionDefinition>,
        prices: UnitPriceConfig,
        payroll: PayrollRates,
    ) -> EngineResult<Self> {
        validate_definitions(&additions)?;
        Ok(Self {
            metadata,
            additions,
            unit_prices: prices.unit_prices,
            deduction: prices.deduction,
            payroll,
        })
    }

    /// Returns the catalog metadata.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Returns the addition definitions in declaration order.
    pub fn additions(&self) -> &[AdditionDefinition] {
        &self.additions
    }

    /// Looks up the unit price for a region grade.
    ///
    /// # Errors
    ///
    /// Returns `UnitPriceNotFound` if no price is configured for the grade.
    pub fn unit_price(&self, grade: u8) -> EngineResult<Decimal> {
        self.unit_prices
            .get(&grade)
            .copied()
            .ok_or(EngineError::UnitPriceNotFound { grade })
    }

    /// Returns the deduction impact rates and cutoffs.
    pub fn deduction_thresholds(&self) -> &DeductionThresholds {
        &self.deduction
    }

    /// Returns the payroll premium and statutory rates.
    pub fn payroll_rates(&self) -> &PayrollRates {
        &self.payroll
    }
}

fn validate_definitions(additions: &[AdditionDefinition]) -> EngineResult<()> {
    let mut seen = HashSet::new();
    for def in additions {
        if !seen.insert(def.code.as_str()) {
            return Err(EngineError::CatalogInvalid {
                code: def.code.clone(),
                message: "duplicate code".to_string(),
            });
        }
        match (def.units, def.percent_rate) {
            (Some(_), Some(_)) => {
                return Err(EngineError::CatalogInvalid {
                    code: def.code.clone(),
                    message: "carries both a unit value and a percent rate".to_string(),
                });
            }
            (None, None) => {
                return Err(EngineError::CatalogInvalid {
                    code: def.code.clone(),
                    message: "carries neither a unit value nor a percent rate".to_string(),
                });
            }
            (Some(units), None) if units < Decimal::ZERO => {
                return Err(EngineError::CatalogInvalid {
                    code: def.code.clone(),
                    message: "unit value cannot be negative".to_string(),
                });
            }
            (None, Some(rate)) if rate <= Decimal::ZERO => {
                return Err(EngineError::CatalogInvalid {
                    code: def.code.clone(),
                    message: "percent rate must be positive".to_string(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
