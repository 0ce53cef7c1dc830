//! Manhua Hub Frontend Entry Point

mod models;
mod shell;
mod storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Log lines kept for the footer's debug panel
const LOG_CAPACITY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if rolling_logger::init(level, LOG_CAPACITY).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already installed".into());
    }
    log::info!("[APP] Starting Manhua Hub");

    mount_to_body(App);
}
