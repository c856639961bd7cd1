//! Error types for the reimbursement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during judgment, simulation,
//! deduction checking, and payroll calculation.
//!
//! "Rule not met" is never an error: an addition that cannot currently be
//! claimed is reported as an `Unmet` judgment, and a compliance signal the
//! caller could not supply degrades only the check that needs it. Errors are
//! reserved for malformed input and broken configuration.

use thiserror::Error;

/// The main error type for the reimbursement engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the hosting application.
///
/// # Example
///
/// ```
/// use reimbursement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An addition definition in the catalog was invalid.
    #[error("Invalid addition definition '{code}': {message}")]
    CatalogInvalid {
        /// The code of the offending definition.
        code: String,
        /// A description of what made the definition invalid.
        message: String,
    },

    /// No unit price is configured for the given region grade.
    #[error("No unit price configured for region grade {grade}")]
    UnitPriceNotFound {
        /// The region grade that was requested.
        grade: u8,
    },

    /// A staff record was invalid or contained inconsistent data.
    #[error("Invalid staff record '{staff_id}': {message}")]
    InvalidStaff {
        /// The ID of the invalid staff record.
        staff_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A facility snapshot field was invalid.
    #[error("Invalid facility field '{field}': {message}")]
    InvalidFacility {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A simulation parameter was invalid.
    #[error("Invalid simulation parameter '{field}': {message}")]
    InvalidSimulation {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// A payroll input record was invalid.
    #[error("Invalid payroll input for staff '{staff_id}': {message}")]
    InvalidPayrollInput {
        /// The ID of the staff member with invalid input.
        staff_id: String,
        /// A description of what made the input invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_catalog_invalid_displays_code_and_message() {
        let error = EngineError::CatalogInvalid {
            code: "staff_allocation_1_fulltime".to_string(),
            message: "duplicate code".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid addition definition 'staff_allocation_1_fulltime': duplicate code"
        );
    }

    #[test]
    fn test_unit_price_not_found_displays_grade() {
        let error = EngineError::UnitPriceNotFound { grade: 9 };
        assert_eq!(
            error.to_string(),
            "No unit price configured for region grade 9"
        );
    }

    #[test]
    fn test_invalid_staff_displays_id_and_message() {
        let error = EngineError::InvalidStaff {
            staff_id: "staff_001".to_string(),
            message: "contracted_weekly_hours cannot be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid staff record 'staff_001': contracted_weekly_hours cannot be negative"
        );
    }

    #[test]
    fn test_invalid_facility_displays_field_and_message() {
        let error = EngineError::InvalidFacility {
            field: "standard_weekly_hours".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid facility field 'standard_weekly_hours': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_payroll_input_displays_staff_and_message() {
        let error = EngineError::InvalidPayrollInput {
            staff_id: "staff_007".to_string(),
            message: "fulltime staff require monthly_salary".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll input for staff 'staff_007': fulltime staff require monthly_salary"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unit_price_not_found() -> EngineResult<()> {
            Err(EngineError::UnitPriceNotFound { grade: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unit_price_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
