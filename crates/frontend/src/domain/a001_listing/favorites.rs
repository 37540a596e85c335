//! Favorite listings, persisted as a JSON array of ids.

use crate::shared::storage::{load_json, save_json, BrowserStorage, PreferenceStore};
use contracts::domain::a001_listing::ListingId;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Favorite ids backed by a preference store.
///
/// Every mutation rewrites the stored array. Ids are kept sorted so the stored
/// text depends only on membership.
#[derive(Clone, Debug)]
pub struct FavoriteSet<S: PreferenceStore> {
    store: S,
    key: String,
    ids: BTreeSet<ListingId>,
}

impl<S: PreferenceStore> FavoriteSet<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = load_json::<Vec<ListingId>>(&store, &key)
            .map(|ids| ids.into_iter().collect())
            .unwrap_or_default();
        Self { store, key, ids }
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist();
        now_favorite
    }

    fn persist(&self) {
        let ids: Vec<&ListingId> = self.ids.iter().collect();
        save_json(&self.store, &self.key, &ids);
        log::debug!("favorites saved: {} ids", ids.len());
    }
}

/// Favorites shared through context.
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    favorites: RwSignal<FavoriteSet<BrowserStorage>>,
}

impl FavoritesContext {
    pub fn new(storage_key: &str) -> Self {
        Self {
            favorites: RwSignal::new(FavoriteSet::load(BrowserStorage, storage_key)),
        }
    }

    pub fn is_favorite(&self, id: &ListingId) -> bool {
        self.favorites.with(|f| f.contains(id))
    }

    pub fn count(&self) -> usize {
        self.favorites.with(|f| f.len())
    }

    pub fn toggle(&self, id: ListingId) {
        self.favorites.update(|f| {
            f.toggle(id);
        });
    }
}

/// Hook to use the favorites context.
pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>()
        .expect("FavoritesContext not found. Provide it in App before rendering listings.")
}
