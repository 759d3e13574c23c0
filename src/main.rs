use std::sync::Arc;
use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use eat_where_la_catalog::config::Config;
use eat_where_la_catalog::controller;
use eat_where_la_catalog::repositories::catalog_repo::CatalogRepo;
use eat_where_la_catalog::repositories::favorite_store::InMemoryFavoriteStore;
use eat_where_la_catalog::repositories::seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting restaurant catalog in {} mode", config.environment);

    let restaurants = match &config.catalog_path {
        Some(path) => seed::load_catalog_from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => seed::default_catalog().context("Bundled catalog is invalid")?,
    };

    let catalog_repo = Arc::new(CatalogRepo::new(
        restaurants,
        Arc::new(InMemoryFavoriteStore::new()),
        config.query_settings(),
    ));
    info!("Catalog seeded with {} restaurants", catalog_repo.catalog_size());

    controller::serve(catalog_repo, &config).await
}
