//! Top Bar Component
//!
//! Brand, section links, route links and the theme toggle.

use leptos::prelude::*;

use crate::shell::{Route, Theme};
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Landing page sections reachable from the nav
const SECTIONS: &[(&str, &str)] = &[
    ("#descobrir", "Descobrir"),
    ("#colecoes", "Coleções"),
    ("#comunidade", "Comunidade"),
];

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_app_store();

    let route_class = move |route: Route| {
        if store.location().read().route == route { "nav-link active" } else { "nav-link" }
    };
    let is_dark = move || store.theme().get() == Theme::Dark;

    view! {
        <header class="topbar">
            <a class="brand" href=Route::Home.href()>
                <span class="brand-mark">"MH"</span>
                <span class="brand-name">"Manhua Hub"</span>
            </a>
            <nav class="nav">
                <a class=move || route_class(Route::Home) href=Route::Home.href()>"Início"</a>
                <a class=move || route_class(Route::Library) href=Route::Library.href()>"Biblioteca"</a>
                {SECTIONS.iter().map(|(href, label)| view! {
                    <a class="nav-link" href=*href>{*label}</a>
                }).collect_view()}
            </nav>
            <button
                class="btn btn-ghost theme-toggle"
                aria-pressed=move || is_dark().to_string()
                on:click=move |_| store_toggle_theme(&store)
            >
                {move || if is_dark() { "Modo claro" } else { "Modo escuro" }}
            </button>
        </header>
    }
}
