use crate::models::restaurant::Restaurant;

/// Case-insensitive free-text match over name, cuisine and address.
///
/// Surrounding whitespace only matters for the blank check; otherwise it is part of the needle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.trim().is_empty()
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if self.is_blank() {
            return true;
        }

        [&restaurant.name, &restaurant.cuisine, &restaurant.address]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Keeps the matching restaurants, in their original order.
    pub fn narrow(&self, restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
        if self.is_blank() {
            return restaurants;
        }

        restaurants
            .into_iter()
            .filter(|restaurant| self.matches(restaurant))
            .collect()
    }
}
