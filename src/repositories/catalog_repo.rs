use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use crate::error::{CatalogError, Result};
use crate::models::favorite::FavoriteStatus;
use crate::models::filter::FilterOptions;
use crate::models::restaurant::Restaurant;
use crate::models::search::SearchQuery;
use crate::repositories::favorite_store::FavoriteStore;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Artificial delay per operation, emulating a remote API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatencyProfile {
    pub list: Duration,
    pub lookup: Duration,
    pub favorites: Duration,
    pub toggle: Duration,
}

impl LatencyProfile {
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            lookup: Duration::ZERO,
            favorites: Duration::ZERO,
            toggle: Duration::ZERO,
        }
    }

    pub fn mock_api() -> Self {
        Self {
            list: Duration::from_millis(500),
            lookup: Duration::from_millis(300),
            favorites: Duration::from_millis(300),
            toggle: Duration::from_millis(200),
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuerySettings {
    pub latency: LatencyProfile,
    pub request_timeout: Duration,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            latency: LatencyProfile::none(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// The catalog query engine: a fixed restaurant list plus a favorite overlay.
pub struct CatalogRepo {
    restaurants: Vec<Restaurant>,
    favorites: Arc<dyn FavoriteStore>,
    settings: QuerySettings,
}

impl CatalogRepo {
    pub fn new(
        restaurants: Vec<Restaurant>,
        favorites: Arc<dyn FavoriteStore>,
        settings: QuerySettings,
    ) -> Self {
        Self {
            restaurants,
            favorites,
            settings,
        }
    }

    pub fn catalog_size(&self) -> usize {
        self.restaurants.len()
    }

    /// Every operation yields at least once and is bounded by the request timeout.
    async fn suspend<T, F>(&self, delay: Duration, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let request_timeout = self.settings.request_timeout;
        let work = async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }
            operation.await
        };

        match tokio::time::timeout(request_timeout, work).await {
            Ok(res) => res,
            Err(_) => {
                warn!("Catalog operation exceeded the {:?} request timeout", request_timeout);
                Err(CatalogError::Timeout(request_timeout))
            }
        }
    }

    /// Restaurants satisfying `filter`, in catalog order. `None` returns the whole catalog.
    pub async fn list_restaurants(
        &self,
        filter: Option<&FilterOptions>,
    ) -> Result<Vec<Restaurant>> {
        self.suspend(self.settings.latency.list, async {
            let favorite_ids = self.favorites.favorite_ids().await;
            let restaurants: Vec<Restaurant> = self
                .restaurants
                .iter()
                .filter(|restaurant| filter.map_or(true, |filter| filter.matches(restaurant)))
                .map(|restaurant| annotate(restaurant, &favorite_ids))
                .collect();

            debug!("Filter {:?} matched {} restaurants", filter, restaurants.len());
            Ok(restaurants)
        }).await
    }

    /// Filters first, then narrows the filtered set by `query`.
    pub async fn search_restaurants(
        &self,
        filter: Option<&FilterOptions>,
        query: &SearchQuery,
    ) -> Result<Vec<Restaurant>> {
        let restaurants = self.list_restaurants(filter).await?;
        Ok(query.narrow(restaurants))
    }

    pub async fn get_restaurant_by_id(
        &self,
        id: &str,
    ) -> Result<Option<Restaurant>> {
        self.suspend(self.settings.latency.lookup, async {
            let restaurant = match self.restaurants.iter().find(|restaurant| restaurant.id == id) {
                Some(restaurant) => restaurant,
                None => {
                    debug!("No restaurant with id: {}", id);
                    return Ok(None);
                }
            };

            let is_favorite = self.favorites.is_favorite(id).await;
            Ok(Some(restaurant.clone().with_favorite(is_favorite)))
        }).await
    }

    pub async fn list_favorites(&self) -> Result<Vec<Restaurant>> {
        self.suspend(self.settings.latency.favorites, async {
            let favorite_ids = self.favorites.favorite_ids().await;
            let favorites: Vec<Restaurant> = self
                .restaurants
                .iter()
                .filter(|restaurant| favorite_ids.contains(&restaurant.id))
                .map(|restaurant| restaurant.clone().with_favorite(true))
                .collect();

            Ok(favorites)
        }).await
    }

    /// Unknown ids are rejected with [`CatalogError::NotFound`].
    pub async fn set_favorite(
        &self,
        id: &str,
        is_favorite: bool,
    ) -> Result<FavoriteStatus> {
        self.suspend(self.settings.latency.toggle, async {
            if !self.restaurants.iter().any(|restaurant| restaurant.id == id) {
                return Err(CatalogError::NotFound(id.to_string()));
            }

            let status = self.favorites.set(id, is_favorite).await?;
            info!("Restaurant {} favorite set to {}", id, status.is_favorite);
            Ok(status)
        }).await
    }
}

fn annotate(
    restaurant: &Restaurant,
    favorite_ids: &HashSet<String>,
) -> Restaurant {
    let is_favorite = favorite_ids.contains(&restaurant.id);
    restaurant.clone().with_favorite(is_favorite)
}
