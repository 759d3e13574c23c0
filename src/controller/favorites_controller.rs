use std::sync::Arc;
use axum::{Extension, Json, Router};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::repositories::catalog_repo::CatalogRepo;

pub fn router(catalog_repo: Arc<CatalogRepo>) -> Router {
    Router::new()
        .route("/favorites", get(retrieve_favorite_restaurants))
        .route("/favorites/:id", put(set_favorite))
        .route_layer(Extension(catalog_repo))
}

#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetFavoriteBody {
    pub is_favorite: bool,
}

pub async fn set_favorite(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
    Path(id): Path<String>,
    Json(body): Json<SetFavoriteBody>,
) -> impl IntoResponse {
    let set_favorite_res = catalog_repo
        .set_favorite(
            &id,
            body.is_favorite,
        ).await;

    return match set_favorite_res {
        Ok(status) => {
            (StatusCode::OK, Json(status)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong updating favorite for restaurant {} due to: {}", id, e);
            e.into_response()
        }
    };
}

pub async fn retrieve_favorite_restaurants(
    Extension(catalog_repo): Extension<Arc<CatalogRepo>>,
) -> impl IntoResponse {
    let favorite_restaurants_res = catalog_repo
        .list_favorites()
        .await;

    return match favorite_restaurants_res {
        Ok(restaurants) => {
            (StatusCode::OK, Json(restaurants)).into_response()
        }
        Err(e) => {
            warn!("Something went wrong retrieving favorite restaurants due to: {}", e);
            e.into_response()
        }
    };
}
