//! Shelf Configuration
//!
//! Tunables for persistence, form limits and shell behavior. Every field has
//! a default, so partial JSON overrides are accepted.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, DESCRIPTION_LIMIT};

pub const DEFAULT_STORAGE_KEY: &str = "manhuaHub.manhuas.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShelfConfig {
    /// Local storage slot holding the JSON item list
    pub storage_key: String,
    /// Upper bound for the count-selection step
    pub max_batch: usize,
    /// Description cap, in characters
    pub description_limit: usize,
    /// Items shown in the landing page "recent" card
    pub recent_limit: usize,
    /// Animation frames to wait for a scroll target to mount
    pub scroll_retry_frames: u32,
    /// How long a notification stays visible
    pub note_timeout_ms: u32,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_batch: 12,
            description_limit: DESCRIPTION_LIMIT,
            recent_limit: 4,
            scroll_retry_frames: 12,
            note_timeout_ms: 4000,
        }
    }
}

impl ShelfConfig {
    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: ShelfConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(DomainError::InvalidInput("storageKey must not be empty".into()));
        }
        if self.max_batch == 0 {
            return Err(DomainError::InvalidInput("maxBatch must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ShelfConfig::from_json(r#"{"maxBatch": 5}"#).unwrap();
        assert_eq!(config.max_batch, 5);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.scroll_retry_frames, 12);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ShelfConfig::from_json(r#"{"storageKey": "  "}"#),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(
            ShelfConfig::from_json("not json"),
            Err(DomainError::Serialization(_))
        ));
    }
}
