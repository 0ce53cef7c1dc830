//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use browser local storage, in-memory maps, etc.

use crate::domain::{Entity, DomainResult};

/// A synchronous string key-value slot store
pub trait KeyValueStore {
    /// Read the raw value under `key`, `None` if absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;
}

/// Whole-collection persistence: the full list is read and written at once
pub trait CollectionRepository<T: Entity> {
    /// Load the stored collection, falling back to `fallback` when nothing usable is stored
    fn load(&mut self, fallback: Vec<T>) -> Vec<T>;

    /// Overwrite the stored collection
    fn save(&mut self, items: &[T]) -> DomainResult<()>;
}
