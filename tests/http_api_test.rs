use std::sync::Arc;
use std::time::Duration;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use eat_where_la_catalog::controller::router_endpoints;
use eat_where_la_catalog::repositories::catalog_repo::{CatalogRepo, LatencyProfile, QuerySettings};
use eat_where_la_catalog::repositories::favorite_store::InMemoryFavoriteStore;
use eat_where_la_catalog::repositories::seed::default_catalog;

fn app_with(settings: QuerySettings) -> Router {
    let catalog_repo = CatalogRepo::new(
        default_catalog().unwrap(),
        Arc::new(InMemoryFavoriteStore::new()),
        settings,
    );
    router_endpoints(Arc::new(catalog_repo))
}

fn app() -> Router {
    app_with(QuerySettings::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())).unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|restaurant| restaurant["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_check_is_ok() {
    let (status, _) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn lists_full_catalog_without_params() {
    let (status, body) = send(&app(), Method::GET, "/restaurants", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(body[0]["priceLevel"], json!("$$"));
    assert_eq!(body[0]["isFavorite"], json!(false));
    assert_eq!(body[0]["coordinates"]["latitude"], json!(37.7749));
}

#[tokio::test]
async fn filters_and_search_compose() {
    let app = app();

    let (_, body) = send(&app, Method::GET, "/restaurants?cuisine=Italian", None).await;
    assert_eq!(ids(&body), vec!["2"]);

    let (_, body) = send(&app, Method::GET, "/restaurants?maxDistance=1&openNow=true", None).await;
    assert_eq!(ids(&body), vec!["1", "3", "5"]);

    let (_, body) = send(&app, Method::GET, "/restaurants?maxDistance=1&q=taco", None).await;
    assert_eq!(ids(&body), vec!["5"]);

    let (_, body) = send(&app, Method::GET, "/restaurants?q=sushi", None).await;
    assert_eq!(ids(&body), vec!["4"]);
}

#[tokio::test]
async fn cards_carry_formatted_labels() {
    let (status, body) = send(&app(), Method::GET, "/restaurant-cards?priceLevel=%24", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": "5",
            "name": "Taco Town",
            "imageUrl": "https://images.pexels.com/photos/2092507/pexels-photo-2092507.jpeg?auto=compress&cs=tinysrgb&h=650&w=940",
            "cuisine": "Mexican",
            "distanceLabel": "0.5 km",
            "ratingLabel": "4.3",
            "priceLevel": "$",
            "isFavorite": false
        }])
    );
}

#[tokio::test]
async fn retrieves_restaurant_with_menu() {
    let (status, body) = send(&app(), Method::GET, "/restaurants/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Pasta Paradise"));
    assert_eq!(body["menu"][1]["items"][1]["spicyLevel"], json!(2));
    assert!(body["menu"][0]["items"][0].get("imageUrl").is_none());
}

#[tokio::test]
async fn unknown_restaurant_is_404() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/restaurants/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("does-not-exist"));

    let (status, _) = send(&app, Method::GET, "/restaurants/does-not-exist/detail", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_includes_contact_links() {
    let (status, body) = send(&app(), Method::GET, "/restaurants/4/detail", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant"]["id"], json!("4"));
    assert_eq!(body["phoneDisplay"], json!("(415) 555-3456"));
    assert_eq!(body["dialUrl"], json!("tel:4155553456"));
    assert_eq!(body["mapUrl"], json!("https://maps.google.com/?q=37.8029,-122.405"));
}

#[tokio::test]
async fn favorite_toggle_round_trip() {
    let app = app();

    let (status, body) = send(&app, Method::PUT, "/favorites/3", Some(json!({ "isFavorite": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!("3"));
    assert_eq!(body["isFavorite"], json!(true));
    assert!(body["updatedAt"].is_string());

    let (_, body) = send(&app, Method::GET, "/favorites", None).await;
    assert_eq!(ids(&body), vec!["3"]);
    assert_eq!(body[0]["isFavorite"], json!(true));

    let (_, body) = send(&app, Method::GET, "/restaurants/3", None).await;
    assert_eq!(body["isFavorite"], json!(true));

    send(&app, Method::PUT, "/favorites/3", Some(json!({ "isFavorite": false }))).await;
    let (_, body) = send(&app, Method::GET, "/favorites", None).await;
    assert!(ids(&body).is_empty());
}

#[tokio::test]
async fn favorite_on_unknown_restaurant_is_404() {
    let (status, _) = send(&app(), Method::PUT, "/favorites/nope", Some(json!({ "isFavorite": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn slow_catalog_is_a_gateway_timeout() {
    let app = app_with(QuerySettings {
        latency: LatencyProfile {
            list: Duration::from_millis(200),
            ..LatencyProfile::none()
        },
        request_timeout: Duration::from_millis(20),
    });

    let (status, _) = send(&app, Method::GET, "/restaurants", None).await;
    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn unknown_route_falls_back() {
    let (status, body) = send(&app(), Method::GET, "/reservations", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}
