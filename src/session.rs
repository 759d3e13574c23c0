//! Client-side state of a restaurant browse screen.
//!
//! Filters go to the catalog engine; the search text only narrows what was already fetched.

use std::sync::Arc;
use tracing::{debug, warn};
use crate::error::{CatalogError, Result};
use crate::helpers::request_sequencer::{RequestSequencer, RequestToken};
use crate::models::favorite::FavoriteStatus;
use crate::models::filter::{FilterChange, FilterOptions};
use crate::models::restaurant::Restaurant;
use crate::models::search::SearchQuery;
use crate::repositories::catalog_repo::CatalogRepo;

/// A favorite flip already shown locally, waiting on the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingToggle {
    pub id: String,
    pub previous: bool,
    pub desired: bool,
}

pub struct BrowseSession {
    catalog_repo: Arc<CatalogRepo>,
    sequencer: RequestSequencer,
    filters: FilterOptions,
    search_text: String,
    fetched: Vec<Restaurant>,
    visible: Vec<Restaurant>,
}

impl BrowseSession {
    pub fn new(catalog_repo: Arc<CatalogRepo>) -> Self {
        Self {
            catalog_repo,
            sequencer: RequestSequencer::new(),
            filters: FilterOptions::default(),
            search_text: String::new(),
            fetched: Vec::new(),
            visible: Vec::new(),
        }
    }

    pub fn filters(&self) -> &FilterOptions {
        &self.filters
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Restaurants after filtering and searching.
    pub fn visible(&self) -> &[Restaurant] {
        &self.visible
    }

    /// Returns true when the filters changed and a refresh is due.
    pub fn change_filter(&mut self, change: FilterChange) -> bool {
        self.filters.apply(change)
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let (token, filters) = self.begin_query();
        let restaurants = self.catalog_repo.list_restaurants(Some(&filters)).await?;
        self.accept(token, restaurants);
        Ok(())
    }

    /// Starts a query whose result must be handed back through [`BrowseSession::accept`].
    pub fn begin_query(&self) -> (RequestToken, FilterOptions) {
        (self.sequencer.issue(), self.filters.clone())
    }

    /// Stores the result unless a newer query was started since. Returns whether it was kept.
    pub fn accept(&mut self, token: RequestToken, restaurants: Vec<Restaurant>) -> bool {
        if !self.sequencer.is_current(token) {
            debug!("Dropping stale catalog response {:?}", token);
            return false;
        }

        self.fetched = restaurants;
        self.apply_search();
        true
    }

    pub fn search(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.apply_search();
    }

    pub fn clear_search(&mut self) {
        self.search("");
    }

    /// Flips the cached flag for `id` so it shows immediately. Hand the engine's answer to
    /// [`BrowseSession::finish_toggle`].
    pub fn begin_toggle(&mut self, id: &str) -> Result<PendingToggle> {
        let previous = self
            .fetched
            .iter()
            .find(|restaurant| restaurant.id == id)
            .map(|restaurant| restaurant.is_favorite)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let pending = PendingToggle {
            id: id.to_string(),
            previous,
            desired: !previous,
        };
        self.set_local_favorite(id, pending.desired);
        Ok(pending)
    }

    /// Settles a pending flip: keeps the stored value on success, restores the old one on failure.
    pub fn finish_toggle(
        &mut self,
        pending: PendingToggle,
        outcome: Result<FavoriteStatus>,
    ) -> Result<bool> {
        match outcome {
            Ok(status) => {
                self.set_local_favorite(&pending.id, status.is_favorite);
                Ok(status.is_favorite)
            }
            Err(e) => {
                warn!("Something went wrong toggling favorite for restaurant {} due to: {}", pending.id, e);
                self.set_local_favorite(&pending.id, pending.previous);
                Err(e)
            }
        }
    }

    pub async fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let pending = self.begin_toggle(id)?;
        let outcome = self.catalog_repo.set_favorite(&pending.id, pending.desired).await;
        self.finish_toggle(pending, outcome)
    }

    fn set_local_favorite(&mut self, id: &str, is_favorite: bool) {
        for restaurant in self.fetched.iter_mut().chain(self.visible.iter_mut()) {
            if restaurant.id == id {
                restaurant.is_favorite = is_favorite;
            }
        }
    }

    fn apply_search(&mut self) {
        self.visible = SearchQuery::new(&self.search_text).narrow(self.fetched.clone());
    }
}
