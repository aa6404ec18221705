//! Pricing
//!
//! Unit prices are computed in minor units and never rounded; rounding to two
//! decimals only happens when a price is displayed. Sums saturate at the `i64`
//! bounds instead of overflowing.

use rusty_money::{Money, iso::Currency};
use tracing::warn;

use crate::{
    cart::lines::CartLine,
    menu::{AddOn, MenuItem, Variation},
    prices::{Price, times},
};

/// Resolves the unit price of one configured item.
///
/// The base is the item's resolved effective price (falling back to its base price);
/// discount windows are not re-evaluated here. The variation delta is added once and
/// every entry in `add_ons` is added once, so two units of the same add-on must appear
/// as two entries. A variation or add-on priced in another currency than the item is
/// skipped.
pub fn resolve_unit_price(
    item: &MenuItem,
    variation: Option<&Variation>,
    add_ons: &[AddOn],
) -> Price {
    let currency = item.currency();

    let variation = variation
        .filter(|variation| priced_in(&variation.id, &variation.price, currency))
        .map_or(0, |variation| variation.price.to_minor_units());

    let total = add_ons
        .iter()
        .filter(|add_on| priced_in(&add_on.id, &add_on.price, currency))
        .map(|add_on| add_on.price.to_minor_units())
        .fold(
            item.unit_base_price().to_minor_units().saturating_add(variation),
            i64::saturating_add,
        );

    Money::from_minor(total, currency)
}

fn priced_in(id: &str, price: &Price, currency: &Currency) -> bool {
    let matches = price.currency() == currency;

    if !matches {
        warn!(
            component = id,
            expected = currency.iso_alpha_code,
            found = price.currency().iso_alpha_code,
            "skipped component priced in another currency"
        );
    }

    matches
}

/// Calculates the total price of a list of cart lines: each unit price times its quantity.
pub fn total_price(lines: &[CartLine], currency: &'static Currency) -> Price {
    let total = lines
        .iter()
        .map(|line| times(line.total_price(), line.quantity()).to_minor_units())
        .fold(0, i64::saturating_add);

    Money::from_minor(total, currency)
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::iso::{PHP, USD};
    use testresult::TestResult;

    use crate::{cart::Cart, menu::Discount};

    use super::*;

    fn php(minor: i64) -> Price {
        Money::from_minor(minor, PHP)
    }

    fn burger() -> MenuItem {
        MenuItem::new("burger", "Burger", "Burgers", php(10_000))
    }

    fn cheese() -> AddOn {
        AddOn::new("cheese", "Cheese", php(1_000), "extras")
    }

    #[test]
    fn plain_item_costs_its_base_price() {
        assert_eq!(resolve_unit_price(&burger(), None, &[]), php(10_000));
    }

    #[test]
    fn variation_delta_is_added_once() {
        let large = Variation::new("large", "Large", php(3_050));

        assert_eq!(
            resolve_unit_price(&burger(), Some(&large), &[]),
            php(13_050)
        );
    }

    #[test]
    fn every_add_on_entry_is_priced() {
        let bacon = AddOn::new("bacon", "Bacon", php(2_500), "extras");

        let price = resolve_unit_price(&burger(), None, &[cheese(), bacon, cheese()]);

        assert_eq!(price, php(14_500));
    }

    #[test]
    fn repeated_entries_match_a_quantity_of_two() {
        let flat = resolve_unit_price(&burger(), None, &[cheese(), cheese()]);
        let doubled = Money::from_minor(
            burger().base_price.to_minor_units() + 2 * cheese().price.to_minor_units(),
            PHP,
        );

        assert_eq!(flat, doubled);
    }

    #[test]
    fn resolved_discount_replaces_base_price() -> TestResult {
        let now: Timestamp = "2025-03-01T12:00:00Z".parse()?;
        let item = burger()
            .with_discount(Discount::always(php(8_000)))
            .resolved_at(now);

        assert_eq!(resolve_unit_price(&item, None, &[cheese()]), php(9_000));

        Ok(())
    }

    #[test]
    fn unresolved_discount_is_ignored() {
        let item = burger().with_discount(Discount::always(php(8_000)));

        assert_eq!(resolve_unit_price(&item, None, &[]), php(10_000));
    }

    #[test]
    fn fractional_prices_do_not_drift() {
        let item = MenuItem::new("tea", "Tea", "Hot Beverages", php(10));
        let sugar = AddOn::new("sugar", "Sugar", php(20), "extras");
        let add_ons = vec![sugar; 1_000];

        assert_eq!(resolve_unit_price(&item, None, &add_ons), php(20_010));
    }

    #[test]
    fn components_in_another_currency_are_skipped() {
        let dollar_cheese = AddOn::new("cheese", "Cheese", Money::from_minor(100, USD), "extras");
        let dollar_large = Variation::new("large", "Large", Money::from_minor(300, USD));

        let price = resolve_unit_price(&burger(), Some(&dollar_large), &[dollar_cheese, cheese()]);

        assert_eq!(price, php(11_000));
    }

    #[test]
    fn unit_price_saturates_instead_of_overflowing() {
        let item = MenuItem::new("gold", "Gold Burger", "Burgers", php(i64::MAX / 2));
        let topping = AddOn::new("leaf", "Gold Leaf", php(i64::MAX / 2), "extras");

        let price = resolve_unit_price(&item, None, &[topping.clone(), topping]);

        assert_eq!(price, php(i64::MAX));
    }

    #[test]
    fn total_saturates_across_lines() {
        let gold = MenuItem::new("gold", "Gold Burger", "Burgers", php(i64::MAX / 2));
        let silver = MenuItem::new("silver", "Silver Burger", "Burgers", php(i64::MAX / 2));
        let mut cart = Cart::new(PHP);

        cart.add(&gold, 2, None, &[]);
        cart.add(&silver, 1, None, &[]);

        assert_eq!(total_price(cart.lines(), PHP), php(i64::MAX));
        assert_eq!(cart.total_price(), php(i64::MAX));
    }
}
