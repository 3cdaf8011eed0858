//! User-scoped favorite locations.
//!
//! Favorites are keyed by (name, country). Hydrated once at startup and
//! flushed synchronously after every toggle. Insertion order is kept for
//! display.

use anyhow::Result;
use std::sync::Arc;

use cielo_weather::Location;

use crate::storage::Storage;

pub(crate) const FAVORITES_KEY: &str = "weather_favorites";

pub struct FavoritesStore {
    storage: Arc<dyn Storage>,
    entries: Vec<Location>,
}

impl FavoritesStore {
    /// Hydrate favorites from durable storage. A missing or malformed
    /// record yields an empty set; malformed records are logged, not fatal.
    pub fn load(storage: Arc<dyn Storage>) -> Result<Self> {
        let entries = match storage.read(FAVORITES_KEY)? {
            Some(bytes) => match serde_json::from_slice::<Vec<Location>>(&bytes) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!("Discarding malformed favorites record: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Ok(Self { storage, entries })
    }

    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    /// Whether a location with the same (name, country) is saved.
    pub fn contains(&self, location: &Location) -> bool {
        self.entries.iter().any(|f| f.same_place(location))
    }

    /// Remove the location if saved, add it otherwise, and persist the
    /// full set. Returns the new list.
    pub fn toggle(&mut self, location: &Location) -> Result<&[Location]> {
        if self.contains(location) {
            self.entries.retain(|f| !f.same_place(location));
        } else {
            self.entries.push(location.clone());
        }

        let bytes = serde_json::to_vec(&self.entries)?;
        self.storage.write(FAVORITES_KEY, &bytes)?;

        Ok(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    fn loc(name: &str, country: &str) -> Location {
        Location {
            id: 0,
            name: name.to_string(),
            country: country.to_string(),
            admin1: None,
            latitude: 1.0,
            longitude: 2.0,
        }
    }

    #[test]
    fn test_load_empty_when_no_record() {
        let store = FavoritesStore::load(Arc::new(MemoryStorage::new())).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_load_empty_on_malformed_record() {
        let storage = Arc::new(MemoryStorage::new());
        storage.write(FAVORITES_KEY, b"{not json").unwrap();
        let store = FavoritesStore::load(storage).unwrap();
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut store = FavoritesStore::load(Arc::new(MemoryStorage::new())).unwrap();
        let madrid = loc("Madrid", "España");

        store.toggle(&madrid).unwrap();
        assert!(store.contains(&madrid));
        assert_eq!(store.entries().len(), 1);

        store.toggle(&madrid).unwrap();
        assert!(!store.contains(&madrid));
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut store = FavoritesStore::load(Arc::new(MemoryStorage::new())).unwrap();
        store.toggle(&loc("Lisboa", "Portugal")).unwrap();

        let before: Vec<_> = store
            .entries()
            .iter()
            .map(|l| (l.name.clone(), l.country.clone()))
            .collect();

        let madrid = loc("Madrid", "España");
        store.toggle(&madrid).unwrap();
        store.toggle(&madrid).unwrap();

        let after: Vec<_> = store
            .entries()
            .iter()
            .map(|l| (l.name.clone(), l.country.clone()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_no_duplicate_name_country_pairs() {
        let mut store = FavoritesStore::load(Arc::new(MemoryStorage::new())).unwrap();

        // Same (name, country) under different coordinates still counts
        // as the same place.
        let mut a = loc("Madrid", "España");
        a.latitude = 40.4;
        let mut b = loc("Madrid", "España");
        b.latitude = 41.0;
        let c = loc("Madrid", "Estados Unidos");

        store.toggle(&a).unwrap();
        store.toggle(&b).unwrap(); // removes a
        store.toggle(&c).unwrap();
        store.toggle(&a).unwrap();

        let pairs: Vec<_> = store
            .entries()
            .iter()
            .map(|l| (l.name.as_str(), l.country.as_str()))
            .collect();
        let mut deduped = pairs.clone();
        deduped.dedup();
        assert_eq!(pairs, deduped);
        assert_eq!(store.entries().len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = FavoritesStore::load(Arc::new(MemoryStorage::new())).unwrap();
        store.toggle(&loc("Madrid", "España")).unwrap();
        store.toggle(&loc("Oslo", "Noruega")).unwrap();
        store.toggle(&loc("Quito", "Ecuador")).unwrap();

        let names: Vec<_> = store.entries().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Madrid", "Oslo", "Quito"]);
    }

    #[test]
    fn test_persists_across_reload() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileStorage::new(dir.path()).unwrap());

        {
            let mut store = FavoritesStore::load(storage.clone()).unwrap();
            store.toggle(&loc("Madrid", "España")).unwrap();
            store.toggle(&loc("Oslo", "Noruega")).unwrap();
        }

        let reloaded = FavoritesStore::load(storage).unwrap();
        assert_eq!(reloaded.entries().len(), 2);
        assert!(reloaded.contains(&loc("Madrid", "España")));
        assert!(reloaded.contains(&loc("Oslo", "Noruega")));
    }
}
