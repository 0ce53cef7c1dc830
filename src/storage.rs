//! Browser Storage Adapter
//!
//! `localStorage` behind the core `KeyValueStore` trait, and a UUID id
//! source for new items.

use gloo_storage::{LocalStorage, Storage};
use manhua_core::{DomainError, DomainResult, IdSource, KeyValueStore};
use uuid::Uuid;
use wasm_bindgen::JsValue;

/// `window.localStorage`. Only constructed through `detect`, since
/// `LocalStorage::raw` throws when storage is missing.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// `None` when this environment has no usable local storage
    pub fn detect() -> Option<Self> {
        let available = web_sys::window()?.local_storage().ok().flatten().is_some();
        available.then_some(BrowserStorage)
    }
}

fn storage_error(context: &str, err: JsValue) -> DomainError {
    DomainError::Storage(format!("{}: {:?}", context, err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(|e| storage_error("getItem", e))
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        // Raw string slot: the repository already owns the JSON encoding.
        // QuotaExceededError ends up here
        LocalStorage::raw().set_item(key, value).map_err(|e| storage_error("setItem", e))
    }
}

/// Random v4 UUIDs for newly created items
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
