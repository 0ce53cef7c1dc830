//! In-Memory Store
//!
//! `KeyValueStore` backed by a map. Used natively and in tests.

use std::collections::HashMap;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
    reject_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with one raw value
    pub fn with_value(key: &str, raw: &str) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.to_string(), raw.to_string());
        store
    }

    /// Store whose writes fail, like a full quota
    pub fn rejecting_writes() -> Self {
        Self { reject_writes: true, ..Self::default() }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        if self.reject_writes {
            return Err(DomainError::Storage(format!("write to {} rejected", key)));
        }
        self.slots.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
