//! Read-only menu data.
//!
//! The menu is externally supplied, presentational input: the board and
//! the order pad render it but never change it. [`Menu::sample`] is the
//! dataset the demo application ships with; embedders inject their own
//! through [`Menu::new`].

use serde::{Deserialize, Serialize};

use crate::core::money;

/// Menu section, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    /// Starters and shareables
    Appetizers,
    /// Main courses
    Mains,
    /// Sweets
    Desserts,
    /// Beverages
    Drinks,
}

impl MenuCategory {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Appetizers, Self::Mains, Self::Desserts, Self::Drinks];

    /// Section heading
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Appetizers => "Appetizers",
            Self::Mains => "Mains",
            Self::Desserts => "Desserts",
            Self::Drinks => "Drinks",
        }
    }
}

/// A single dish or drink on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Stable identifier used by the order pad and the admin buttons
    pub id: u32,
    /// Display name
    pub name: String,
    /// One-line description shown under the name
    pub description: String,
    /// Price in dollars
    pub price: f64,
    /// Menu section this item belongs to
    pub category: MenuCategory,
}

impl MenuItem {
    /// Creates a menu item
    #[must_use]
    pub fn new(id: u32, name: &str, description: &str, price: f64, category: MenuCategory) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
        }
    }

    /// Price with exactly two fractional digits, e.g. `"12.50"`
    #[must_use]
    pub fn price_display(&self) -> String {
        money::format_amount(self.price)
    }
}

/// The menu the components render
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Creates a menu over the given items
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The hard-coded dataset the demo application ships with
    #[must_use]
    pub fn sample() -> Self {
        use MenuCategory::{Appetizers, Desserts, Drinks, Mains};
        Self::new(vec![
            MenuItem::new(1, "Bruschetta", "Grilled bread, tomato, basil", 8.5, Appetizers),
            MenuItem::new(2, "Crispy Calamari", "Lemon aioli", 12.0, Appetizers),
            MenuItem::new(3, "Grilled Salmon", "Seasonal vegetables", 25.5, Mains),
            MenuItem::new(4, "Ribeye Steak", "12 oz, garlic butter", 34.0, Mains),
            MenuItem::new(5, "Mushroom Risotto", "Arborio rice, parmesan", 19.75, Mains),
            MenuItem::new(6, "Tiramisu", "Espresso-soaked ladyfingers", 9.5, Desserts),
            MenuItem::new(7, "Basque Cheesecake", "Burnt top, vanilla cream", 10.0, Desserts),
            MenuItem::new(8, "House Lemonade", "Fresh squeezed", 4.5, Drinks),
            MenuItem::new(9, "Espresso", "Double shot", 3.75, Drinks),
            MenuItem::new(10, "Glass of Rioja", "Spanish red", 11.0, Drinks),
        ])
    }

    /// All items, in menu order
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the menu has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id
    #[must_use]
    pub fn item(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items belonging to one section, in menu order
    #[must_use]
    pub fn in_category(&self, category: MenuCategory) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Sections that actually have items, in display order
    #[must_use]
    pub fn categories(&self) -> Vec<MenuCategory> {
        MenuCategory::ALL
            .into_iter()
            .filter(|c| self.items.iter().any(|item| item.category == *c))
            .collect()
    }
}
