//! Menu Providers
//!
//! The menu data source sits outside the cart core. Providers hand over
//! already-resolved [`MenuItem`] snapshots; a failed fetch is reported as
//! [`ProviderError::FetchFailure`] and never reaches the cart.

use jiff::Timestamp;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    fixtures::FixtureError,
    menu::{MenuItem, categories::Category},
};

/// Errors reported by a menu provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The menu or category records could not be fetched.
    #[error("failed to fetch menu: {0}")]
    FetchFailure(String),
}

impl From<FixtureError> for ProviderError {
    fn from(err: FixtureError) -> Self {
        ProviderError::FetchFailure(err.to_string())
    }
}

/// A read-only source of menu records.
pub trait MenuProvider {
    /// Currency all of the provider's prices are expressed in.
    fn currency(&self) -> &'static Currency;

    /// Fetches menu items with their discount windows evaluated at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::FetchFailure`] if the records cannot be read.
    fn fetch_menu_items(&self, now: Timestamp) -> Result<Vec<MenuItem>, ProviderError>;

    /// Fetches the category table. An empty table is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::FetchFailure`] if the records cannot be read.
    fn fetch_categories(&self) -> Result<Vec<Category>, ProviderError>;
}

/// A provider over in-memory records.
#[derive(Debug, Clone)]
pub struct StaticMenuProvider {
    currency: &'static Currency,
    items: Vec<MenuItem>,
    categories: Vec<Category>,
}

impl StaticMenuProvider {
    /// Create a provider with no items or categories.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            currency,
            items: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Adds a menu item.
    #[must_use]
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    /// Adds a category.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }
}

impl MenuProvider for StaticMenuProvider {
    fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn fetch_menu_items(&self, now: Timestamp) -> Result<Vec<MenuItem>, ProviderError> {
        Ok(self
            .items
            .iter()
            .cloned()
            .map(|item| item.resolved_at(now))
            .collect())
    }

    fn fetch_categories(&self) -> Result<Vec<Category>, ProviderError> {
        Ok(self.categories.clone())
    }
}
