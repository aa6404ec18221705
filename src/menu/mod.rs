//! Menu
//!
//! Read-only menu records as supplied by a [`MenuProvider`](crate::provider::MenuProvider).
//! Nothing in the cart ever mutates these; cart lines take snapshots.

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::prices::Price;

pub mod catalog;
pub mod categories;

/// Category whose items preselect their first variation (a flavour, not a size).
pub const FLAVOURED_CATEGORY: &str = "Cold Beverages";

/// A mutually-exclusive size or flavour option.
#[derive(Debug, Clone, PartialEq)]
pub struct Variation {
    /// Variation id
    pub id: String,

    /// Display name
    pub name: String,

    /// Price delta added once to the unit price
    pub price: Price,
}

impl Variation {
    /// Creates a new variation.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// An optional extra which may be selected more than once.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn {
    /// Add-on id
    pub id: String,

    /// Display name
    pub name: String,

    /// Price per unit
    pub price: Price,

    /// Grouping label used when listing add-ons
    pub category: String,
}

impl AddOn {
    /// Creates a new add-on.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// A time-bounded price reduction on a menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    /// Discounted unit price
    pub price: Price,

    /// Master switch; an inactive discount never applies
    pub active: bool,

    /// Inclusive start of the discount window
    pub starts_at: Option<Timestamp>,

    /// Inclusive end of the discount window
    pub ends_at: Option<Timestamp>,
}

impl Discount {
    /// An active discount with no window bounds.
    pub fn always(price: Price) -> Self {
        Self {
            price,
            active: true,
            starts_at: None,
            ends_at: None,
        }
    }

    /// Whether the discount applies at `now`.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        self.active
            && self.starts_at.is_none_or(|start| now >= start)
            && self.ends_at.is_none_or(|end| now <= end)
    }
}

/// A menu item definition.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Item id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    pub description: String,

    /// Category name
    pub category: String,

    /// Regular unit price
    pub base_price: Price,

    /// Whether the item can currently be ordered
    pub available: bool,

    /// Highlighted on the menu
    pub popular: bool,

    /// Position in the catalog
    pub sort_order: i64,

    /// Optional time-bounded discount
    pub discount: Option<Discount>,

    /// Price after discount evaluation, set by the provider via [`MenuItem::resolved_at`]
    pub effective_price: Option<Price>,

    /// Whether the discount was active when the item was resolved
    pub is_on_discount: bool,

    /// Size or flavour options, in display order
    pub variations: Vec<Variation>,

    /// Extras, in display order
    pub add_ons: Vec<AddOn>,
}

impl MenuItem {
    /// Creates an available item with no discount, variations or add-ons.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            base_price,
            available: true,
            popular: false,
            sort_order: 0,
            discount: None,
            effective_price: None,
            is_on_discount: false,
            variations: Vec::new(),
            add_ons: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a variation.
    #[must_use]
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    /// Adds an add-on.
    #[must_use]
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        self.add_ons.push(add_on);
        self
    }

    /// Sets the discount. The effective price is not updated until [`MenuItem::resolved_at`].
    #[must_use]
    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Currency of the item's prices.
    pub fn currency(&self) -> &'static Currency {
        self.base_price.currency()
    }

    /// Whether a discount applies at `now`.
    pub fn is_discount_active_at(&self, now: Timestamp) -> bool {
        self.discount
            .as_ref()
            .is_some_and(|discount| discount.is_active_at(now))
    }

    /// The unit price applicable at `now`.
    pub fn effective_price_at(&self, now: Timestamp) -> Price {
        match &self.discount {
            Some(discount) if discount.is_active_at(now) => discount.price,
            _ => self.base_price,
        }
    }

    /// Evaluates the discount window once and records the result on the item.
    #[must_use]
    pub fn resolved_at(mut self, now: Timestamp) -> Self {
        self.is_on_discount = self.is_discount_active_at(now);
        self.effective_price = Some(self.effective_price_at(now));
        self
    }

    /// The price used as the base of unit pricing: the resolved effective price, else the
    /// base price.
    pub fn unit_base_price(&self) -> Price {
        self.effective_price.unwrap_or(self.base_price)
    }

    /// Amount saved per unit while on discount.
    pub fn savings(&self) -> Option<Price> {
        let discount = self.discount.as_ref().filter(|_| self.is_on_discount)?;

        Some(Money::from_minor(
            self.base_price.to_minor_units() - discount.price.to_minor_units(),
            self.currency(),
        ))
    }

    /// Finds a variation by id.
    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|variation| variation.id == id)
    }

    /// Finds an add-on by id.
    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|add_on| add_on.id == id)
    }

    /// The variation preselected when the item is opened.
    ///
    /// Flavoured drinks have no plain option, so their first flavour is chosen; every
    /// other item starts on its base price.
    pub fn default_variation(&self) -> Option<&Variation> {
        if self.category == FLAVOURED_CATEGORY {
            self.variations.first()
        } else {
            None
        }
    }

    /// Add-ons grouped by their category, groups in first-seen order.
    pub fn add_ons_by_category(&self) -> Vec<(&str, SmallVec<[&AddOn; 4]>)> {
        let mut groups: Vec<(&str, SmallVec<[&AddOn; 4]>)> = Vec::new();

        for add_on in &self.add_ons {
            match groups
                .iter_mut()
                .find(|(category, _)| *category == add_on.category)
            {
                Some((_, members)) => members.push(add_on),
                None => groups.push((add_on.category.as_str(), SmallVec::from_elem(add_on, 1))),
            }
        }

        groups
    }
}
