//! Menu catalog shared by the order form and the intake endpoint.
//!
//! The catalog is the single source of truth for menu packages: the form
//! fetches it over `/api/menus` and the intake endpoint prices against it,
//! so the two can never drift apart.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(id: &str, name: &str, description: &str, price: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new(vec![
            MenuItem::new(
                "classique",
                "Le classique",
                "1 Burger + 1 coca + 1 cookie",
                12.99,
            ),
            MenuItem::new(
                "fraicheur",
                "Fraicheur Légère",
                "1 salade césar + 1 oasis + 1 tarte au citron",
                14.99,
            ),
            MenuItem::new(
                "delight",
                "Le Delight",
                "1 planche de charcuterie + 1 caramel macchiato + 1 charlotte aux fraises",
                18.99,
            ),
            MenuItem::new(
                "gourmand",
                "Le Gourmand",
                "1 Croque Monsieur + 1 Jus d'ananas + 1 Brownie",
                15.99,
            ),
            MenuItem::new(
                "festin",
                "Le festin",
                "1 Pizza Jambon + 1 Frite patate douce + 2 Pain perdu + 3 Limonade",
                24.99,
            ),
        ])
    }
}
