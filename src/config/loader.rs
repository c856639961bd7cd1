//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a
//! fiscal-year catalog from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AdditionCatalog, AdditionsConfig, CatalogMetadata, PayrollRates, UnitPriceConfig,
};

/// Loads and provides access to a fiscal-year catalog.
///
/// The `CatalogLoader` reads the YAML configuration files from a directory
/// and validates them into an immutable [`AdditionCatalog`]. A fiscal-year
/// update loads a whole new catalog and swaps it in atomically.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/fy2024/
/// ├── catalog.yaml      # Catalog metadata
/// ├── additions.yaml    # Ordered addition definitions
/// ├── unit_prices.yaml  # Region unit prices and deduction thresholds
/// └── payroll.yaml      # Premium multipliers and statutory rates
/// ```
///
/// # Example
///
/// ```no_run
/// use reimbursement_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/fy2024").unwrap();
/// println!("Catalog: {}", loader.catalog().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: AdditionCatalog,
}

impl CatalogLoader {
    /// Loads a catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any required file is missing (`ConfigNotFound`),
    /// contains invalid YAML (`ConfigParseError`), or describes an invalid
    /// addition definition (`CatalogInvalid`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CatalogMetadata>(&path.join("catalog.yaml"))?;
        let additions = Self::load_yaml::<AdditionsConfig>(&path.join("additions.yaml"))?;
        let prices = Self::load_yaml::<UnitPriceConfig>(&path.join("unit_prices.yaml"))?;
        let payroll = Self::load_yaml::<PayrollRates>(&path.join("payroll.yaml"))?;

        let catalog = AdditionCatalog::new(metadata, additions.additions, prices, payroll)?;

        Ok(Self { catalog })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &AdditionCatalog {
        &self.catalog
    }

    /// Consumes the loader, returning the catalog.
    pub fn into_catalog(self) -> AdditionCatalog {
        self.catalog
    }
}
