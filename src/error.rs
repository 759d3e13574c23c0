use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    #[error("Transient failure: {0}")]
    TransientFailure(String),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
