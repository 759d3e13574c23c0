use serde::{Deserialize, Serialize};
use crate::helpers::formatters::{format_distance, format_phone_number, format_price_level, format_rating};
use crate::models::restaurant::Restaurant;

/// Compact list entry, labels already formatted for display.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCard {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub cuisine: String,
    pub distance_label: String,
    pub rating_label: String,
    pub price_level: String,
    pub is_favorite: bool,
}

impl From<&Restaurant> for RestaurantCard {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id.clone(),
            name: restaurant.name.clone(),
            image_url: restaurant.image_url.clone(),
            cuisine: restaurant.cuisine.clone(),
            distance_label: format_distance(restaurant.distance),
            rating_label: format_rating(restaurant.rating),
            price_level: format_price_level(&restaurant.price_level),
            is_favorite: restaurant.is_favorite,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    pub phone_display: String,
    pub dial_url: String,
    pub map_url: String,
}

impl From<Restaurant> for RestaurantDetail {
    fn from(restaurant: Restaurant) -> Self {
        let phone_display = format_phone_number(&restaurant.phone_number);
        let dial_url = format!("tel:{}", restaurant.phone_number);
        let map_url = format!(
            "https://maps.google.com/?q={},{}",
            restaurant.coordinates.latitude,
            restaurant.coordinates.longitude,
        );

        Self {
            restaurant,
            phone_display,
            dial_url,
            map_url,
        }
    }
}
