//! Menu Fixtures

use jiff::Timestamp;
use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, PHP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    menu::{
        AddOn, Discount, MenuItem, Variation,
        categories::{Category, category_slug, icon_for},
    },
    prices::{Price, decimal_to_minor},
    provider::StaticMenuProvider,
};

/// Menu catalog file
#[derive(Debug, Deserialize)]
pub struct MenuFixture {
    /// Currency code shared by every price (e.g., "PHP")
    pub currency: String,

    /// Category table; derived from items when empty
    #[serde(default)]
    pub categories: Vec<CategoryFixture>,

    /// Menu items in catalog order
    pub items: Vec<MenuItemFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Category id, defaults to the slug of the name
    pub id: Option<String>,

    /// Display name
    pub name: String,

    /// Emoji icon, defaults to the well-known icon for the name
    pub icon: Option<String>,

    /// Navigation position
    #[serde(default)]
    pub sort_order: i64,

    /// Hidden when false
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Menu Item Fixture
#[derive(Debug, Deserialize)]
pub struct MenuItemFixture {
    /// Item id
    pub id: String,

    /// Display name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Category name
    pub category: String,

    /// Base price (e.g., "189.00 PHP")
    pub price: String,

    /// Whether the item can be ordered
    #[serde(default = "default_true")]
    pub available: bool,

    /// Highlighted on the menu
    #[serde(default)]
    pub popular: bool,

    /// Catalog position
    #[serde(default)]
    pub sort_order: i64,

    /// Optional discount
    pub discount: Option<DiscountFixture>,

    /// Size or flavour options
    #[serde(default)]
    pub variations: Vec<VariationFixture>,

    /// Extras
    #[serde(default)]
    pub add_ons: Vec<AddOnFixture>,
}

/// Discount Fixture
#[derive(Debug, Deserialize)]
pub struct DiscountFixture {
    /// Discounted price (e.g., "159.00 PHP")
    pub price: String,

    /// Master switch
    #[serde(default = "default_true")]
    pub active: bool,

    /// Inclusive window start
    pub starts_at: Option<Timestamp>,

    /// Inclusive window end
    pub ends_at: Option<Timestamp>,
}

/// Variation Fixture
#[derive(Debug, Deserialize)]
pub struct VariationFixture {
    /// Variation id
    pub id: String,

    /// Display name
    pub name: String,

    /// Price delta (e.g., "40.00 PHP")
    pub price: String,
}

/// Add-on Fixture
#[derive(Debug, Deserialize)]
pub struct AddOnFixture {
    /// Add-on id
    pub id: String,

    /// Display name
    pub name: String,

    /// Price per unit (e.g., "25.00 PHP")
    pub price: String,

    /// Grouping label
    #[serde(default)]
    pub category: String,
}

fn default_true() -> bool {
    true
}

/// Parses a YAML menu catalog into a provider.
///
/// # Errors
///
/// Returns an error if the YAML is invalid, the currency is unknown, or any price is
/// malformed, negative, or in another currency.
pub fn parse_menu(contents: &str) -> Result<StaticMenuProvider, FixtureError> {
    let fixture: MenuFixture = serde_norway::from_str(contents)?;
    let currency = parse_currency(&fixture.currency)?;

    let provider = fixture
        .categories
        .into_iter()
        .map(Category::from)
        .fold(StaticMenuProvider::new(currency), StaticMenuProvider::with_category);

    fixture
        .items
        .into_iter()
        .try_fold(provider, |provider, item| -> Result<_, FixtureError> {
            Ok(provider.with_item(item.into_menu_item(currency)?))
        })
}

impl From<CategoryFixture> for Category {
    fn from(fixture: CategoryFixture) -> Self {
        Category {
            id: fixture.id.unwrap_or_else(|| category_slug(&fixture.name)),
            icon: fixture
                .icon
                .unwrap_or_else(|| icon_for(&fixture.name).to_string()),
            name: fixture.name,
            sort_order: fixture.sort_order,
            active: fixture.active,
        }
    }
}

impl MenuItemFixture {
    /// Converts the fixture into a menu item, checking every price against `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if any price is malformed, negative, or in another currency.
    pub fn into_menu_item(self, currency: &'static Currency) -> Result<MenuItem, FixtureError> {
        let discount = self
            .discount
            .map(|discount| -> Result<Discount, FixtureError> {
                Ok(Discount {
                    price: price_in(&discount.price, currency)?,
                    active: discount.active,
                    starts_at: discount.starts_at,
                    ends_at: discount.ends_at,
                })
            })
            .transpose()?;

        let variations = self
            .variations
            .into_iter()
            .map(|v| -> Result<Variation, FixtureError> {
                Ok(Variation::new(v.id, v.name, price_in(&v.price, currency)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let add_ons = self
            .add_ons
            .into_iter()
            .map(|a| -> Result<AddOn, FixtureError> {
                Ok(AddOn::new(a.id, a.name, price_in(&a.price, currency)?, a.category))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let base_price = price_in(&self.price, currency)?;

        let mut item = MenuItem::new(self.id, self.name, self.category, base_price)
            .with_description(self.description);

        item.available = self.available;
        item.popular = self.popular;
        item.sort_order = self.sort_order;
        item.discount = discount;
        item.variations = variations;
        item.add_ons = add_ons;

        Ok(item)
    }
}

/// Parse a currency code
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes other than PHP, USD, EUR and GBP.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code {
        "PHP" => Ok(PHP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        "GBP" => Ok(GBP),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse price string (e.g., "149.50 PHP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal or is negative, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FixtureError::NegativePrice(s.to_string()));
    }

    let currency = parse_currency(code)?;

    let minor_units = decimal_to_minor(amount, currency)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

fn price_in(s: &str, expected: &'static Currency) -> Result<Price, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    if currency != expected {
        return Err(FixtureError::CurrencyMismatch(
            expected.iso_alpha_code.to_string(),
            currency.iso_alpha_code.to_string(),
        ));
    }

    Ok(Money::from_minor(minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::provider::MenuProvider;

    use super::*;

    const MENU: &str = r#"
currency: PHP
categories:
  - name: Burgers
    sort_order: 1
  - id: drinks
    name: Cold Beverages
    icon: "🧃"
    sort_order: 2
items:
  - id: classic-burger
    name: Classic Burger
    description: Quarter pound patty
    category: Burgers
    price: 189.00 PHP
    popular: true
    sort_order: 1
    discount:
      price: 159.00 PHP
      starts_at: "2025-01-01T00:00:00Z"
      ends_at: "2025-01-31T23:59:59Z"
    variations:
      - id: double
        name: Double
        price: 60.00 PHP
    add_ons:
      - id: cheese
        name: Cheese
        price: 25.00 PHP
        category: extras
  - id: iced-tea
    name: Iced Tea
    category: Cold Beverages
    price: 55.50 PHP
    available: false
    sort_order: 2
"#;

    #[test]
    fn parse_menu_builds_items_and_categories() -> TestResult {
        let provider = parse_menu(MENU)?;
        let inside: Timestamp = "2025-01-15T12:00:00Z".parse()?;

        let items = provider.fetch_menu_items(inside)?;
        let categories = provider.fetch_categories()?;

        assert_eq!(provider.currency(), PHP);
        assert_eq!(items.len(), 2);

        let burger = items.first().ok_or("missing burger")?;

        assert_eq!(burger.base_price, Money::from_minor(18_900, PHP));
        assert_eq!(burger.effective_price, Some(Money::from_minor(15_900, PHP)));
        assert!(burger.is_on_discount);
        assert!(burger.popular);
        assert_eq!(burger.description, "Quarter pound patty");
        assert_eq!(
            burger.variation("double").map(|v| v.price),
            Some(Money::from_minor(6_000, PHP))
        );
        assert_eq!(burger.add_on("cheese").map(|a| a.category.as_str()), Some("extras"));

        let tea = items.get(1).ok_or("missing tea")?;

        assert!(!tea.available);
        assert_eq!(tea.base_price, Money::from_minor(5_550, PHP));

        let summary: Vec<(&str, &str)> = categories
            .iter()
            .map(|c| (c.id.as_str(), c.icon.as_str()))
            .collect();

        assert_eq!(summary, vec![("burgers", "🍔"), ("drinks", "🧃")]);

        Ok(())
    }

    #[test]
    fn discount_outside_window_is_not_applied() -> TestResult {
        let provider = parse_menu(MENU)?;
        let after: Timestamp = "2025-02-01T00:00:00Z".parse()?;

        let items = provider.fetch_menu_items(after)?;
        let burger = items.first().ok_or("missing burger")?;

        assert!(!burger.is_on_discount);
        assert_eq!(burger.effective_price, Some(Money::from_minor(18_900, PHP)));

        Ok(())
    }

    #[test]
    fn parse_menu_rejects_mixed_currencies() {
        let yaml = concat!(
            "currency: PHP\nitems:\n",
            "  - id: a\n    name: A\n    category: X\n    price: 1.00 USD\n",
        );

        let result = parse_menu(yaml);

        assert!(matches!(
            result,
            Err(FixtureError::CurrencyMismatch(expected, found))
                if expected == "PHP" && found == "USD"
        ));
    }

    #[test]
    fn parse_menu_rejects_unknown_catalog_currency() {
        let result = parse_menu("currency: ABC\nitems: []\n");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        assert!(matches!(parse_price("2.99PHP"), Err(FixtureError::InvalidPrice(_))));
        assert!(matches!(parse_price("2.99 PHP extra"), Err(FixtureError::InvalidPrice(_))));
        assert!(matches!(parse_price("abc PHP"), Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        assert!(matches!(parse_price("-1.00 PHP"), Err(FixtureError::NegativePrice(_))));
    }

    #[test]
    fn parse_price_accepts_supported_currencies() -> TestResult {
        assert_eq!(parse_price("149.50 PHP")?, (14_950, PHP));
        assert_eq!(parse_price("1.00 USD")?, (100, USD));
        assert_eq!(parse_price("2.50 EUR")?, (250, EUR));
        assert_eq!(parse_price("0 GBP")?, (0, GBP));

        Ok(())
    }
}
