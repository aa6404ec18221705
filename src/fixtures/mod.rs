//! Fixtures
//!
//! YAML menu catalogs under `<base>/menus/<name>.yml`, loaded into a
//! [`StaticMenuProvider`].

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::provider::StaticMenuProvider;

pub mod menu;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Prices may not be negative
    #[error("Negative price: {0}")]
    NegativePrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price is not in the catalog currency
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a menu catalog by name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price is malformed or
    /// negative, or if a price is not in the catalog currency.
    pub fn load_menu(&self, name: &str) -> Result<StaticMenuProvider, FixtureError> {
        let file_path = self.base_path.join("menus").join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "reading menu fixture");

        let contents = fs::read_to_string(&file_path)?;

        menu::parse_menu(&contents)
    }

    /// Load a menu catalog by name from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the menu cannot be loaded, see [`Fixture::load_menu`].
    pub fn from_set(name: &str) -> Result<StaticMenuProvider, FixtureError> {
        Self::new().load_menu(name)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
