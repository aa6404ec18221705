//! Cart Lines

use std::{borrow::Borrow, fmt};

use smallvec::SmallVec;

use crate::{
    menu::{AddOn, Variation},
    prices::{Price, times},
};

/// Composite key of a cart line: `<item>-<variation>-<add-on signature>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Wraps an already-derived key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LineId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LineId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LineId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An add-on snapshot with the number of units selected.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedAddOn {
    /// Add-on as it was when the line was created
    pub add_on: AddOn,

    /// Units of this add-on per configured item, at least 1
    pub quantity: u32,
}

/// One aggregated cart entry: N units of one exact configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    id: LineId,
    menu_item_id: String,
    name: String,
    quantity: u32,
    selected_variation: Option<Variation>,
    selected_add_ons: SmallVec<[SelectedAddOn; 4]>,
    total_price: Price,
}

impl CartLine {
    pub(crate) fn new(
        id: LineId,
        menu_item_id: String,
        name: String,
        quantity: u32,
        selected_variation: Option<Variation>,
        selected_add_ons: SmallVec<[SelectedAddOn; 4]>,
        total_price: Price,
    ) -> Self {
        Self {
            id,
            menu_item_id,
            name,
            quantity,
            selected_variation,
            selected_add_ons,
            total_price,
        }
    }

    /// Returns the line's composite id
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Returns the id of the menu item this line was configured from
    pub fn menu_item_id(&self) -> &str {
        &self.menu_item_id
    }

    /// Returns the menu item name at the time the line was created
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of units on this line
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the selected variation snapshot
    pub fn selected_variation(&self) -> Option<&Variation> {
        self.selected_variation.as_ref()
    }

    /// Returns the grouped add-on snapshots, in the order they were first selected
    pub fn selected_add_ons(&self) -> &[SelectedAddOn] {
        &self.selected_add_ons
    }

    /// Returns the unit price of one configured item, fixed when the line was created
    pub fn total_price(&self) -> &Price {
        &self.total_price
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Price {
        times(&self.total_price, self.quantity)
    }

    pub(crate) fn increment(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::PHP};
    use smallvec::smallvec;

    use super::*;

    fn line(quantity: u32) -> CartLine {
        CartLine::new(
            LineId::new("burger-no-variation-cheese-2"),
            "burger".to_string(),
            "Burger".to_string(),
            quantity,
            None,
            smallvec![SelectedAddOn {
                add_on: AddOn::new("cheese", "Cheese", Money::from_minor(1_000, PHP), "extras"),
                quantity: 2,
            }],
            Money::from_minor(12_000, PHP),
        )
    }

    #[test]
    fn line_total_multiplies_unit_price() {
        assert_eq!(line(3).line_total(), Money::from_minor(36_000, PHP));
    }

    #[test]
    fn increment_saturates() {
        let mut line = line(u32::MAX - 1);

        line.increment(5);

        assert_eq!(line.quantity(), u32::MAX);
    }

    #[test]
    fn line_id_compares_with_strings() {
        let line = line(1);

        assert_eq!(line.id(), &LineId::new("burger-no-variation-cheese-2"));
        assert!(*line.id() == "burger-no-variation-cheese-2");
        assert_eq!(line.id().to_string(), "burger-no-variation-cheese-2");
    }
}
