use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::CatalogError;
use crate::models::filter::FilterOptions;
use crate::models::presentation::{RestaurantCard, RestaurantDetail};
use crate::models::search::SearchQuery;
use crate::repositories::catalog_repo::CatalogRepo;

pub fn router(catalog_repo: Arc<CatalogRepo>) -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/restaurants/:id", get(retrieve_restaurant))
        .route("/restaurants/:id/detail", get(retrieve_restaurant_detail))
        .route("/restaurant-cards", get(list_restaurant_cards))
        .route_layer(Extension(catalog_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListRestaurantsParam {
    pub cuisine: Option<String>,
    pub max_distance: Option<f64>,
    pub price_level: Option<String>,
    pub rating: Option<f64>,
    pub open_now: Option<bool>,
    pub q: Option<String>,
}

impl ListRestaurantsParam {
    /// `None` when no filter parameter was supplied at all.
    pub fn filter(&self) -> Option<FilterOptions> {
        if self.cuisine.is_none()
            && self.max_distance.is_none()
            && self.price_level.is_none()
            && self.rating.is_none()
            && self.open_now.is_none()
        {
            return None;
        }

        Some(FilterOptions {
            cuisine: self.cuisine.clone(),
            max_distance: self.max_distance,
            price_level: self.price_level.clone(),
            rating: self.rating,
            open_now: self.open_now.unwrap_or(false),
        })
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(self.q.as_deref().unwrap_or_default())
    }
}

pub async fn list_restaurants(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Query(query): Query<ListRestaurantsParam>,
) -> impl IntoResponse {
    let restaurants_res = catalog_repo
        .search_restaurants(
            query.filter().as_ref(),
            &query.search_query(),
        ).await;

    return match restaurants_res {
        Ok(restaurants) => {
            (StatusCode::OK, Json(restaurants)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong listing restaurants due to: {}", e);
            e.into_response()
        }
    };
}

pub async fn list_restaurant_cards(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Query(query): Query<ListRestaurantsParam>,
) -> impl IntoResponse {
    let restaurants_res = catalog_repo
        .search_restaurants(
            query.filter().as_ref(),
            &query.search_query(),
        ).await;

    return match restaurants_res {
        Ok(restaurants) => {
            let cards: Vec<RestaurantCard> = restaurants.iter().map(RestaurantCard::from).collect();
            (StatusCode::OK, Json(cards)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong listing restaurant cards due to: {}", e);
            e.into_response()
        }
    };
}

pub async fn retrieve_restaurant(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let restaurant_res = catalog_repo
        .get_restaurant_by_id(&id)
        .await;

    return match restaurant_res {
        Ok(Some(restaurant)) => {
            (StatusCode::OK, Json(restaurant)).into_response()
        }
        Ok(None) => CatalogError::NotFound(id).into_response(),
        Err(e) => {
            warn!("Something went wrong retrieving restaurant {} due to: {}", id, e);
            e.into_response()
        }
    };
}

pub async fn retrieve_restaurant_detail(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let restaurant_res = catalog_repo
        .get_restaurant_by_id(&id)
        .await;

    return match restaurant_res {
        Ok(Some(restaurant)) => {
            (StatusCode::OK, Json(RestaurantDetail::from(restaurant))).into_response()
        }
        Ok(None) => CatalogError::NotFound(id).into_response(),
        Err(e) => {
            warn!("Something went wrong retrieving restaurant detail {} due to: {}", id, e);
            e.into_response()
        }
    };
}
