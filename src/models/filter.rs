use serde::{Deserialize, Serialize};
use crate::models::restaurant::Restaurant;

/// Optional constraints narrowing a catalog query. Every `None` field imposes no constraint.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub max_distance: Option<f64>,
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    /// Accepted but never evaluated against opening hours.
    #[serde(default)]
    pub open_now: bool,
}

/// A single-field update to a [`FilterOptions`].
#[derive(Clone, Debug, PartialEq)]
pub enum FilterChange {
    Cuisine(Option<String>),
    MaxDistance(Option<f64>),
    PriceLevel(Option<String>),
    Rating(Option<f64>),
    OpenNow(bool),
}

impl FilterOptions {
    pub fn is_unconstrained(&self) -> bool {
        self.cuisine_constraint().is_none()
            && self.max_distance.is_none()
            && self.price_level.is_none()
            && self.rating.is_none()
    }

    /// Applies `change` and reports whether anything changed.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let before = self.clone();
        match change {
            FilterChange::Cuisine(cuisine) => self.cuisine = cuisine,
            FilterChange::MaxDistance(max_distance) => self.max_distance = max_distance,
            FilterChange::PriceLevel(price_level) => self.price_level = price_level,
            FilterChange::Rating(rating) => self.rating = rating,
            FilterChange::OpenNow(open_now) => self.open_now = open_now,
        }
        *self != before
    }

    /// Conjunction of cuisine, distance, price level and minimum rating, in that order.
    /// Both numeric bounds include equality.
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(cuisine) = self.cuisine_constraint() {
            if restaurant.cuisine != cuisine {
                return false;
            }
        }

        if let Some(max_distance) = self.max_distance {
            if restaurant.distance > max_distance {
                return false;
            }
        }

        if let Some(price_level) = &self.price_level {
            if &restaurant.price_level != price_level {
                return false;
            }
        }

        if let Some(rating) = self.rating {
            if restaurant.rating < rating {
                return false;
            }
        }

        true
    }

    // An empty cuisine selects everything, same as "All".
    fn cuisine_constraint(&self) -> Option<&str> {
        self.cuisine.as_deref().filter(|cuisine| !cuisine.is_empty())
    }
}
