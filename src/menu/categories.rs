//! Categories

use crate::menu::MenuItem;

/// Icon used when a category has none of its own.
pub const DEFAULT_ICON: &str = "🍽️";

const ICONS: &[(&str, &str)] = &[
    ("Starters", "🍽️"),
    ("Salads", "🥗"),
    ("Burgers", "🍔"),
    ("Pizza", "🍕"),
    ("Wings", "🍗"),
    ("Sandwiches", "🥪"),
    ("Pasta", "🍝"),
    ("Solo Meals", "🍚"),
    ("Batangas Lomi", "🍜"),
    ("Frappe", "☕"),
    ("Cold Beverages", "🥤"),
    ("Hot Beverages", "☕"),
    ("Beer", "🍺"),
    ("Breakfast", "🍳"),
    ("Rice Meals", "🍛"),
    ("Group Meals", "👥"),
    ("Main Dishes", "🍖"),
    ("Beverages", "🥤"),
    ("Desserts", "🍰"),
    ("Appetizers", "🥗"),
    ("Soups", "🍲"),
    ("Seafood", "🐟"),
    ("Chicken", "🐔"),
    ("Beef", "🥩"),
    ("Vegetarian", "🥬"),
    ("Vegan", "🌱"),
];

/// A menu category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Slug id, e.g. `solo-meals`
    pub id: String,

    /// Display name, e.g. `Solo Meals`
    pub name: String,

    /// Emoji icon
    pub icon: String,

    /// Position in the navigation, ascending
    pub sort_order: i64,

    /// Inactive categories are hidden
    pub active: bool,
}

impl Category {
    /// Creates an active category whose id is the slug of its name.
    pub fn named(name: impl Into<String>, sort_order: i64) -> Self {
        let name = name.into();

        Self {
            id: category_slug(&name),
            icon: icon_for(&name).to_string(),
            name,
            sort_order,
            active: true,
        }
    }

    /// Whether `item` belongs to this category, matched by slug or by exact name.
    pub fn contains(&self, item: &MenuItem) -> bool {
        category_slug(&item.category) == self.id || item.category == self.name
    }
}

/// Lowercases a category name and replaces each run of whitespace with `-`.
pub fn category_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The icon for a well-known category name.
pub fn icon_for(name: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(known, _)| *known == name)
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}

/// Derives categories from the distinct categories of available items, in first-seen order.
pub fn derive_categories<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for item in items.into_iter().filter(|item| item.available) {
        if categories.iter().any(|category| category.name == item.category) {
            continue;
        }

        let sort_order = i64::try_from(categories.len()).map_or(i64::MAX, |n| n + 1);

        categories.push(Category::named(item.category.clone(), sort_order));
    }

    categories
}
