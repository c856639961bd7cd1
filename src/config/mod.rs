//! Catalog configuration for the reimbursement engine.
//!
//! The rule catalog (addition definitions, unit prices, deduction
//! thresholds, payroll rates) is loaded from versioned YAML files into an
//! immutable [`AdditionCatalog`] passed explicitly into each calculation.

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{
    AdditionCatalog, AdditionDefinition, AdditionsConfig, CatalogMetadata, DeductionThresholds,
    EligibilityRule, ExperiencedAlternative, IncomeTaxTable, InsuranceRates, PayrollRates,
    PremiumRates, RatioCondition, ResidentTaxRates, RuleScope, TaxBracket, UnitPriceConfig,
};
