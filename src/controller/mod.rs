use std::sync::Arc;
use anyhow::Context;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use crate::config::Config;
use crate::error::CatalogError;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::catalog_repo::CatalogRepo;

pub mod favorites_controller;
pub mod health_check;
pub mod restaurant_controller;

pub async fn serve(
    catalog_repo: Arc<CatalogRepo>,
    config: &Config,
) -> anyhow::Result<()> {
    let origins: Vec<HeaderValue> = config
        .origins()
        .into_iter()
        .filter_map(|origin| match origin.parse() {
            Ok(header) => Some(header),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {} due to: {}", origin, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    let application = router_endpoints(catalog_repo)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::PUT,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        );

    info!("API server listening on: {}", config.bind_address);
    axum::Server::bind(&config.bind_address)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(catalog_repo: Arc<CatalogRepo>) -> Router {
    health_check::router()
        .merge(restaurant_controller::router(catalog_repo.clone()))
        .merge(favorites_controller::router(catalog_repo))
        .fallback(page_not_found_handler)
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            CatalogError::TransientFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
