//! Integration test for the firehouse menu fixture.
//!
//! Loads `fixtures/menus/firehouse.yml`, checks discount resolution and the
//! derived categories, then orders from it:
//!
//! 1. Classic Burger, cheese x2 + bacon, twice in different pick orders
//!    - ₱159.00 (discounted) + ₱50.00 + ₱45.00 = ₱254.00 each, x2 = ₱508.00
//! 2. Soda in Can, default flavour (Cola), x2
//!    - ₱60.00 each = ₱120.00
//! 3. Korean Soy Wings, 12 pcs, ranch dip (discount window has expired)
//!    - ₱245.00 + ₱220.00 + ₱25.00 = ₱490.00
//!
//! Expected total: ₱1,118.00 over 5 items.

use jiff::Timestamp;
use rusty_money::{Money, iso::PHP};
use testresult::TestResult;

use carta::prelude::*;

fn load() -> Result<Menu, Box<dyn std::error::Error>> {
    let provider = Fixture::from_set("firehouse")?;
    let now: Timestamp = "2025-03-01T12:00:00Z".parse()?;

    Ok(Menu::load(&provider, now)?)
}

#[test]
fn menu_resolves_discounts_at_load_time() -> TestResult {
    let menu = load()?;

    let burger = menu.item("classic-burger").ok_or("missing burger")?;
    let wings = menu.item("korean-soy-wings").ok_or("missing wings")?;

    assert!(burger.is_on_discount);
    assert_eq!(burger.unit_base_price(), Money::from_minor(15_900, PHP));
    assert_eq!(burger.savings(), Some(Money::from_minor(3_000, PHP)));

    assert!(!wings.is_on_discount);
    assert_eq!(wings.unit_base_price(), Money::from_minor(24_500, PHP));

    Ok(())
}

#[test]
fn menu_derives_categories_from_available_items() -> TestResult {
    let menu = load()?;

    let ids: Vec<&str> = menu.categories().iter().map(|c| c.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "starters",
            "burgers",
            "wings",
            "pasta",
            "solo-meals",
            "cold-beverages",
            "frappe"
        ]
    );

    let sections = menu.sections(Some("starters"));
    let starters: Vec<&str> = sections
        .first()
        .map(|(_, items)| items.iter().map(|item| item.id.as_str()).collect())
        .unwrap_or_default();

    assert_eq!(starters, vec!["cheesy-nachos", "french-fries"]);

    Ok(())
}

#[test]
fn ordering_from_the_menu() -> TestResult {
    let menu = load()?;
    let mut cart = Cart::new(menu.currency());

    let burger = menu.item("classic-burger").ok_or("missing burger")?;
    let cheese = burger.add_on("cheese").ok_or("missing cheese")?;
    let bacon = burger.add_on("bacon").ok_or("missing bacon")?;

    cart.add(burger, 1, None, &[cheese.clone(), bacon.clone(), cheese.clone()]);
    cart.add(burger, 1, None, &[bacon.clone(), cheese.clone(), cheese.clone()]);

    let soda = menu.item("soda-in-can").ok_or("missing soda")?;
    cart.add(soda, 2, soda.default_variation(), &[]);

    let wings = menu.item("korean-soy-wings").ok_or("missing wings")?;
    let ranch = wings.add_on("ranch").ok_or("missing ranch")?;
    cart.add(wings, 1, wings.variation("wings-12"), &[ranch.clone()]);

    let ids: Vec<&str> = cart.iter().map(|line| line.id().as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "classic-burger-no-variation-bacon-1,cheese-2",
            "soda-in-can-cola-no-addons",
            "korean-soy-wings-wings-12-ranch-1"
        ]
    );

    let burger_line = cart.lines_for("classic-burger").next().ok_or("missing line")?;

    assert_eq!(burger_line.total_price(), &Money::from_minor(25_400, PHP));
    assert_eq!(burger_line.quantity(), 2);

    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(), Money::from_minor(111_800, PHP));

    let mut out = Vec::new();
    OrderSummary::from_cart(&cart).write_to(&mut out)?;

    let output = String::from_utf8(out)?;

    assert!(output.contains("Classic Burger"));
    assert!(output.contains("Cheese Slice x2"));
    assert!(output.contains("Cola"));
    assert!(output.contains("Items: 5"));

    Ok(())
}
