use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub const MAX_SPICY_LEVEL: u8 = 3;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub address: String,
    /// Kilometers from the user.
    pub distance: f64,
    pub rating: f64,
    /// Repeated currency symbols, `"$"` through `"$$$$"`.
    pub price_level: String,
    pub cuisine: String,
    pub opening_hours: String,
    /// Digits only, unformatted.
    pub phone_number: String,
    pub description: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub is_favorite: bool,
    pub menu: Vec<MenuCategory>,
}

impl Restaurant {
    pub fn find_menu_item(&self, category_id: &str, item_id: &str) -> Option<&MenuItem> {
        self.menu
            .iter()
            .find(|category| category.id == category_id)
            .and_then(|category| category.items.iter().find(|item| item.id == item_id))
    }

    /// Popular dishes across every category, in menu order.
    pub fn popular_items(&self) -> Vec<&MenuItem> {
        self.menu
            .iter()
            .flat_map(|category| category.items.iter())
            .filter(|item| item.is_popular.unwrap_or(false))
            .collect()
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub spicy_level: Option<u8>,
    pub is_vegetarian: Option<bool>,
    pub is_gluten_free: Option<bool>,
    pub is_popular: Option<bool>,
}

impl MenuItem {
    pub fn spice_level(&self) -> u8 {
        self.spicy_level.unwrap_or(0).min(MAX_SPICY_LEVEL)
    }

    pub fn is_spicy(&self) -> bool {
        self.spice_level() > 0
    }
}
