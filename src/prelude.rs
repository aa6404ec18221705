//! Carta prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        Cart, CartCommand,
        configuration::{AddOnGroups, NO_ADD_ONS, NO_VARIATION, line_id},
        lines::{CartLine, LineId, SelectedAddOn},
        summary::{OrderSummary, SummaryError},
    },
    fixtures::{Fixture, FixtureError},
    menu::{
        AddOn, Discount, MenuItem, Variation,
        catalog::Menu,
        categories::{Category, category_slug, derive_categories},
    },
    prices::Price,
    pricing::resolve_unit_price,
    provider::{MenuProvider, ProviderError, StaticMenuProvider},
};
