//! Carta
//!
//! Carta is the ordering core of a restaurant menu: it resolves unit prices for
//! configured menu items (variations, repeated add-ons, time-bounded discounts)
//! and aggregates them into a cart of canonical, mergeable lines.

pub mod cart;
pub mod fixtures;
pub mod menu;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod provider;
pub mod utils;
