//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through the intent functions below.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use manhua_core::seed::starter_shelf;
use manhua_core::{DomainError, ManhuaRepository, Shelf, ShelfConfig, ShelfForm};

use crate::context::AppContext;
use crate::models::{ManhuaItem, Note, RowField};
use crate::shell::{Location, Theme};
use crate::storage::{BrowserStorage, UuidIds};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// The collection and its persistence
    pub shelf: Shelf<BrowserStorage>,
    /// Create/edit modal
    pub form: ShelfForm,
    pub theme: Theme,
    pub location: Location,
    pub note: Option<Note>,
    /// Sequence for `note`
    pub note_seq: u32,
}

impl AppState {
    pub fn new(config: &ShelfConfig, location: Location) -> Self {
        let repo = match BrowserStorage::detect() {
            Some(storage) => ManhuaRepository::new(storage, config),
            None => {
                log::warn!("[STORAGE] localStorage unavailable, shelf will not persist");
                ManhuaRepository::detached(config)
            }
        };
        Self {
            shelf: Shelf::open(repo, starter_shelf()),
            form: ShelfForm::new(config),
            theme: Theme::default(),
            location,
            note: None,
            note_seq: 0,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Notifications
// ========================

/// Show `text`, replacing any current note, and clear it after the configured timeout
pub fn store_note(store: &AppStore, ctx: &AppContext, text: impl Into<String>) {
    let seq = {
        let field = store.note_seq();
        let mut next = field.write();
        *next = next.wrapping_add(1);
        *next
    };
    *store.note().write() = Some(Note { seq, text: text.into() });

    let store = *store;
    let timeout = ctx.config(|c| c.note_timeout_ms);
    spawn_local(async move {
        TimeoutFuture::new(timeout).await;
        let still_current = matches!(&*store.note().read_untracked(), Some(note) if note.seq == seq);
        if still_current {
            *store.note().write() = None;
        }
    });
}

fn store_report(store: &AppStore, ctx: &AppContext, err: DomainError) {
    let text = match err {
        DomainError::Storage(_) | DomainError::Serialization(_) => {
            "Não foi possível salvar no navegador. As mudanças valem só nesta sessão.".to_string()
        }
        DomainError::NotFound(_) => "Esse manhua não está mais na sua estante.".to_string(),
        other => other.to_string(),
    };
    store_note(store, ctx, text);
}

// ========================
// Shelf Intents
// ========================

pub fn store_toggle_favorite(store: &AppStore, ctx: &AppContext, id: &str) {
    let result = store.shelf().write().toggle_favorite(id);
    if let Err(e) = result {
        store_report(store, ctx, e);
    }
}

pub fn store_delete(store: &AppStore, ctx: &AppContext, id: &str) {
    let result = store.shelf().write().delete(id);
    match result {
        Ok(removed) => store_note(store, ctx, format!("\"{}\" saiu da sua estante.", removed.name)),
        Err(e) => store_report(store, ctx, e),
    }
}

pub fn store_import(store: &AppStore, ctx: &AppContext) {
    let result = store.shelf().write().import_seed(&mut UuidIds);
    match result {
        Ok(0) => store_note(store, ctx, "Sua lista importada já está na estante."),
        Ok(added) => store_note(store, ctx, format!("{} manhuas importados para a sua estante.", added)),
        Err(e) => store_report(store, ctx, e),
    }
}

// ========================
// Form Intents
// ========================

pub fn store_open_create(store: &AppStore) {
    store.form().write().open_create();
}

pub fn store_open_edit(store: &AppStore, ctx: &AppContext, items: Vec<ManhuaItem>) {
    let opened = store.form().write().open_edit(&items);
    if !opened {
        store_note(store, ctx, "Nada para editar ainda. Crie sua estante primeiro.");
    }
}

pub fn store_close_form(store: &AppStore) {
    store.form().write().close();
}

pub fn store_set_count(store: &AppStore, raw: String) {
    store.form().write().set_count_input(raw);
}

pub fn store_confirm_count(store: &AppStore) {
    if let Some(count) = store.form().write().confirm_count() {
        log::debug!("[FORM] Editing {} new rows", count);
    }
}

pub fn store_update_row(store: &AppStore, index: usize, field: RowField, value: String) {
    store.form().write().update_row(index, field, value);
}

/// Validate and apply the open form. On a validation error the form stays
/// open with its message and the shelf is untouched.
pub fn store_submit_form(store: &AppStore, ctx: &AppContext) {
    // Separate guards: shelf and form share one store lock
    let existing = store.shelf().read_untracked().items().to_vec();
    let result = store.form().write().submit(&existing, &mut UuidIds);

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            log::info!("[FORM] {}", e);
            return;
        }
    };

    let applied = store.shelf().write().apply_form(&outcome);
    match applied {
        Ok(_) => store_note(store, ctx, outcome.success_message()),
        Err(e) => store_report(store, ctx, e),
    }
}

// ========================
// Shell Intents
// ========================

pub fn store_toggle_theme(store: &AppStore) {
    let field = store.theme();
    let mut theme = field.write();
    *theme = theme.toggled();
}

pub fn store_navigate(store: &AppStore, location: Location) {
    log::debug!("[NAV] {:?}", location);
    *store.location().write() = location;
}
