//! Cart
//!
//! The cart owns its lines exclusively. Every operation is total: unknown ids,
//! zero or negative quantities are absorbed rather than reported.

use rusty_money::iso::Currency;
use tracing::{debug, warn};

use crate::{
    cart::{
        configuration::{AddOnGroups, line_id},
        lines::{CartLine, LineId},
    },
    menu::{AddOn, MenuItem, Variation},
    prices::Price,
    pricing::{resolve_unit_price, total_price},
};

pub mod configuration;
pub mod lines;
pub mod summary;

/// A message-style cart operation, applied with [`Cart::apply`].
#[derive(Debug, Clone)]
pub enum CartCommand<'a> {
    /// Add `quantity` units of a configured item.
    Add {
        /// Menu item being ordered
        item: &'a MenuItem,

        /// Units to add
        quantity: u32,

        /// Selected variation, if any
        variation: Option<&'a Variation>,

        /// Flat add-on list, one entry per unit
        add_ons: &'a [AddOn],
    },

    /// Replace a line's quantity; zero or less removes the line.
    UpdateQuantity {
        /// Line to update
        id: LineId,

        /// New quantity
        quantity: i64,
    },

    /// Remove a line.
    Remove(LineId),

    /// Remove every line.
    Clear,

    /// Show the cart panel.
    Open,

    /// Hide the cart panel.
    Close,
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
    is_open: bool,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
            is_open: false,
        }
    }

    /// Applies a command and returns the resulting cart.
    #[must_use]
    pub fn apply(mut self, command: CartCommand<'_>) -> Self {
        match command {
            CartCommand::Add {
                item,
                quantity,
                variation,
                add_ons,
            } => {
                self.add(item, quantity, variation, add_ons);
            }
            CartCommand::UpdateQuantity { id, quantity } => {
                self.update_quantity(id.as_str(), quantity);
            }
            CartCommand::Remove(id) => self.remove(id.as_str()),
            CartCommand::Clear => self.clear(),
            CartCommand::Open => self.open(),
            CartCommand::Close => self.close(),
        }

        self
    }

    /// Adds `quantity` units of `item` configured with `variation` and `add_ons`.
    ///
    /// `add_ons` is a flat list with one entry per unit. If a line with the same
    /// configuration exists its quantity grows; otherwise a new line is appended.
    /// Returns the id of the affected line, or `None` when `quantity` is zero or the
    /// item is priced in another currency than the cart.
    pub fn add(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        variation: Option<&Variation>,
        add_ons: &[AddOn],
    ) -> Option<LineId> {
        if quantity == 0 {
            return None;
        }

        if item.currency() != self.currency {
            warn!(
                item = %item.id,
                expected = self.currency.iso_alpha_code,
                found = item.currency().iso_alpha_code,
                "ignored item priced in another currency"
            );

            return None;
        }

        let groups = AddOnGroups::from_flat(add_ons);
        let id = line_id(item, variation, &groups);

        if let Some(line) = self.lines.iter_mut().find(|line| *line.id() == id) {
            line.increment(quantity);

            debug!(line_id = %id, quantity = line.quantity(), "merged into cart line");

            return Some(id);
        }

        let unit_price = resolve_unit_price(item, variation, add_ons);

        debug!(line_id = %id, quantity, unit_price = %unit_price, "added cart line");

        self.lines.push(CartLine::new(
            id.clone(),
            item.id.clone(),
            item.name.clone(),
            quantity,
            variation.cloned(),
            groups.to_selected(),
            unit_price,
        ));

        Some(id)
    }

    /// Sets the quantity of a line. Zero or less removes it; unknown ids are ignored.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(line) = self.lines.iter_mut().find(|line| *line.id() == id) {
            line.set_quantity(quantity);

            debug!(line_id = %id, quantity, "updated cart line quantity");
        }
    }

    /// Removes a line; unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        let before = self.lines.len();

        self.lines.retain(|line| *line.id() != id);

        if self.lines.len() != before {
            debug!(line_id = %id, "removed cart line");
        }
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        debug!(lines = self.lines.len(), "cleared cart");

        self.lines.clear();
    }

    /// Sum of unit price times quantity over all lines; zero for an empty cart.
    pub fn total_price(&self) -> Price {
        total_price(&self.lines, self.currency)
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Get a line by id.
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| *line.id() == id)
    }

    /// Summed quantity over every line configured from the given menu item.
    pub fn quantity_for(&self, menu_item_id: &str) -> u64 {
        self.lines_for(menu_item_id)
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// The line holding `menu_item_id` with no variation and no add-ons, if any.
    pub fn plain_line<'a>(&'a self, menu_item_id: &'a str) -> Option<&'a CartLine> {
        self.lines_for(menu_item_id).find(|line| {
            line.selected_variation().is_none() && line.selected_add_ons().is_empty()
        })
    }

    /// Lines configured from the given menu item, in insertion order.
    pub fn lines_for<'a>(&'a self, menu_item_id: &'a str) -> impl Iterator<Item = &'a CartLine> {
        self.lines
            .iter()
            .filter(move |line| line.menu_item_id() == menu_item_id)
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Whether the cart panel is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show the cart panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Hide the cart panel.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}
