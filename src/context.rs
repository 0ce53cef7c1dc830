//! Application Context
//!
//! Read-only settings provided via Leptos Context API.

use leptos::prelude::*;
use manhua_core::ShelfConfig;

/// Meta tag that may carry JSON config overrides
const CONFIG_META: &str = "meta[name=\"manhua-hub-config\"]";

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<ShelfConfig>,
}

impl AppContext {
    pub fn new(config: ShelfConfig) -> Self {
        Self { config: StoredValue::new(config) }
    }

    /// Read a config field without cloning the whole config
    pub fn config<T>(&self, f: impl FnOnce(&ShelfConfig) -> T) -> T {
        self.config.with_value(f)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Defaults, overridden by the page's config meta tag when present and valid
pub fn load_config() -> ShelfConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.query_selector(CONFIG_META).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    match raw {
        None => ShelfConfig::default(),
        Some(raw) => ShelfConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("[APP] Ignoring config meta tag: {}", e);
            ShelfConfig::default()
        }),
    }
}
