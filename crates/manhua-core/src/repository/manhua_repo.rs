//! Manhua Repository
//!
//! Persists the whole shelf as one JSON array under a single key.
//! Reads are sanitized; writes overwrite the slot (last writer wins).

use crate::config::ShelfConfig;
use crate::domain::{DomainResult, ManhuaItem};
use super::sanitize::{parse_list, sanitize};
use super::traits::{CollectionRepository, KeyValueStore};

/// Local-storage backed shelf repository
///
/// Without a store (no persistent storage in this environment) `load` passes
/// the fallback through and `save` does nothing.
#[derive(Debug, Clone)]
pub struct ManhuaRepository<S> {
    store: Option<S>,
    key: String,
    description_limit: usize,
}

impl<S: KeyValueStore> ManhuaRepository<S> {
    pub fn new(store: S, config: &ShelfConfig) -> Self {
        Self {
            store: Some(store),
            key: config.storage_key.clone(),
            description_limit: config.description_limit,
        }
    }

    /// Repository for environments without persistent storage
    pub fn detached(config: &ShelfConfig) -> Self {
        Self {
            store: None,
            key: config.storage_key.clone(),
            description_limit: config.description_limit,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    fn write(store: &mut S, key: &str, items: &[ManhuaItem]) -> DomainResult<()> {
        let raw = serde_json::to_string(items)?;
        store.set(key, &raw)
    }
}

impl<S: KeyValueStore> CollectionRepository<ManhuaItem> for ManhuaRepository<S> {
    fn load(&mut self, fallback: Vec<ManhuaItem>) -> Vec<ManhuaItem> {
        let Some(store) = self.store.as_mut() else {
            return fallback;
        };

        let raw = match store.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                // Unreadable is not the same as empty: leave the slot alone
                log::warn!("[STORAGE] Read of {} failed: {}", self.key, e);
                return fallback;
            }
        };

        let Some(values) = raw.as_deref().and_then(parse_list) else {
            log::info!("[STORAGE] No usable shelf under {}, seeding {} items", self.key, fallback.len());
            if let Err(e) = Self::write(store, &self.key, &fallback) {
                log::warn!("[STORAGE] Seeding {} failed: {}", self.key, e);
            }
            return fallback;
        };

        let sanitized = sanitize(&values, self.description_limit);
        if sanitized.is_empty() {
            log::warn!("[STORAGE] All {} stored elements were invalid, using fallback", values.len());
            return fallback;
        }
        if sanitized.len() < values.len() {
            log::warn!("[STORAGE] Dropped {} invalid stored elements", values.len() - sanitized.len());
        }

        if let Err(e) = Self::write(store, &self.key, &sanitized) {
            log::warn!("[STORAGE] Rewriting sanitized shelf failed: {}", e);
        }
        sanitized
    }

    fn save(&mut self, items: &[ManhuaItem]) -> DomainResult<()> {
        match self.store.as_mut() {
            Some(store) => Self::write(store, &self.key, items),
            None => Ok(()),
        }
    }
}
