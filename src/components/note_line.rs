//! Note Line Component
//!
//! Toast-like inline notification text.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoteLine() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.note().get().map(|note| view! {
            <p class="action-note" aria-live="polite">{note.text}</p>
        })}
    }
}
