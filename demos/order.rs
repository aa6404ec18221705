//! Ordering Example
//!
//! Loads a menu fixture, lists its sections, fills a cart the way a customer
//! would and prints the order summary.
//!
//! Use `-f` to load a menu fixture by name
//! Use `-c` to list only one category (by id, e.g. `burgers`)
//! Set `RUST_LOG=carta=debug` to trace cart mutations

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;

use carta::{
    cart::{Cart, summary::OrderSummary},
    fixtures::Fixture,
    menu::catalog::Menu,
    utils::ExampleOrderArgs,
};

/// Ordering Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = ExampleOrderArgs::parse();

    let provider = Fixture::from_set(&args.fixture)?;
    let menu = Menu::load(&provider, Timestamp::now())?;

    for (category, items) in menu.sections(args.category.as_deref()) {
        println!("\n{} {}", category.icon, category.name);

        for item in items {
            let price = item.unit_base_price();
            let status = if item.available { "" } else { " (unavailable)" };

            match item.savings() {
                Some(savings) => {
                    println!(
                        "  {:<24} {price}  was {}, save {savings}{status}",
                        item.name, item.base_price
                    );
                }
                None => println!("  {:<24} {price}{status}", item.name),
            }
        }
    }

    let mut cart = Cart::new(menu.currency());

    let burger = menu.item("classic-burger").context("missing classic-burger")?;
    let cheese = burger.add_on("cheese").context("missing cheese")?;
    let bacon = burger.add_on("bacon").context("missing bacon")?;

    // same configuration picked in a different order merges into one line
    cart.add(burger, 1, None, &[cheese.clone(), bacon.clone(), cheese.clone()]);
    cart.add(burger, 1, None, &[bacon.clone(), cheese.clone(), cheese.clone()]);

    let soda = menu.item("soda-in-can").context("missing soda-in-can")?;
    cart.add(soda, 2, soda.default_variation(), &[]);

    let fries = menu.item("french-fries").context("missing french-fries")?;
    let fries_line = cart.add(fries, 1, fries.variation("fries-barkada"), &[]);

    if let Some(id) = fries_line {
        cart.update_quantity(id.as_str(), 3);
    }

    cart.open();

    OrderSummary::from_cart(&cart).write_to(io::stdout().lock())?;

    Ok(())
}
