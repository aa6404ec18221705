//! Menu Catalog

use jiff::Timestamp;
use rusty_money::iso::Currency;
use tracing::{info, warn};

use crate::{
    menu::{
        MenuItem,
        categories::{Category, derive_categories},
    },
    provider::{MenuProvider, ProviderError},
};

/// A loaded, read-only menu snapshot.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    categories: Vec<Category>,
    currency: &'static Currency,
}

impl Menu {
    /// Loads items and categories from `provider`, resolving discounts at `now`.
    ///
    /// Items are ordered by `sort_order`, keeping provider order for ties. When the
    /// provider has no category table, categories are derived from the items.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::FetchFailure`] if either fetch fails.
    pub fn load(provider: &impl MenuProvider, now: Timestamp) -> Result<Self, ProviderError> {
        let mut items = provider.fetch_menu_items(now)?;

        items.sort_by_key(|item| item.sort_order);

        let mut categories = provider.fetch_categories()?;

        if categories.is_empty() {
            warn!("provider has no categories; deriving them from menu items");

            categories = derive_categories(&items);
        }

        categories.retain(|category| category.active);
        categories.sort_by_key(|category| category.sort_order);

        info!(
            items = items.len(),
            categories = categories.len(),
            currency = provider.currency().iso_alpha_code,
            "loaded menu"
        );

        Ok(Self {
            items,
            categories,
            currency: provider.currency(),
        })
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Active categories ordered by `sort_order`.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Currency of every price on the menu.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Finds an item by id.
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Finds a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Items belonging to `category`, in catalog order.
    pub fn items_in<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a MenuItem> {
        self.items.iter().filter(move |item| category.contains(item))
    }

    /// Menu sections to display: every category, or only `selected` when given.
    /// Categories without items are skipped.
    pub fn sections(&self, selected: Option<&str>) -> Vec<(&Category, Vec<&MenuItem>)> {
        self.categories
            .iter()
            .filter(|category| selected.is_none_or(|id| category.id == id))
            .map(|category| (category, self.items_in(category).collect::<Vec<_>>()))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}
