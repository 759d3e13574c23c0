use std::collections::{HashMap, HashSet};
use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use crate::error::Result;
use crate::models::favorite::FavoriteStatus;

/// Per-restaurant favorite flags layered over the catalog.
///
/// A failed `set` must leave the previous flag intact.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn is_favorite(&self, id: &str) -> bool;

    async fn favorite_ids(&self) -> HashSet<String>;

    async fn set(&self, id: &str, is_favorite: bool) -> Result<FavoriteStatus>;
}

#[derive(Clone, Debug)]
struct FavoriteEntry {
    is_favorite: bool,
    updated_at: OffsetDateTime,
}

/// Lives as long as the process.
#[derive(Default)]
pub struct InMemoryFavoriteStore {
    entries: RwLock<HashMap<String, FavoriteEntry>>,
}

impl InMemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_favorites<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = OffsetDateTime::now_utc();
        let entries = ids
            .into_iter()
            .map(|id| (id.into(), FavoriteEntry { is_favorite: true, updated_at: now }))
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl FavoriteStore for InMemoryFavoriteStore {
    async fn is_favorite(&self, id: &str) -> bool {
        self.entries
            .read()
            .await
            .get(id)
            .map(|entry| entry.is_favorite)
            .unwrap_or(false)
    }

    async fn favorite_ids(&self) -> HashSet<String> {
        self.entries
            .read()
            .await
            .iter()
            .filter(|(_, entry)| entry.is_favorite)
            .map(|(id, _)| id.clone())
            .collect()
    }

    async fn set(&self, id: &str, is_favorite: bool) -> Result<FavoriteStatus> {
        let mut entries = self.entries.write().await;

        // Re-setting the same value keeps the original timestamp.
        let entry = match entries.get(id) {
            Some(existing) if existing.is_favorite == is_favorite => existing.clone(),
            _ => FavoriteEntry {
                is_favorite,
                updated_at: OffsetDateTime::now_utc(),
            },
        };
        entries.insert(id.to_string(), entry.clone());

        Ok(FavoriteStatus {
            id: id.to_string(),
            is_favorite: entry.is_favorite,
            updated_at: entry.updated_at,
        })
    }
}
