//! Manhua Hub Frontend App
//!
//! Shell layout: top bar, the routed page, the shelf modal and the footer.

use leptos::prelude::*;
use leptos_anchor_scroll::use_anchor_scroll;
use reactive_stores::Store;

use crate::components::{HomePage, LibraryPage, ShelfModal, SiteFooter, TopBar};
use crate::context::{load_config, AppContext};
use crate::shell::{apply_theme, current_hash, Location, Route};
use crate::store::{store_navigate, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let frames = config.scroll_retry_frames;
    let store = Store::new(AppState::new(&config, Location::parse(&current_hash())));

    // Provide context to all children
    provide_context(AppContext::new(config));
    provide_context(store);

    let _hash_listener = window_event_listener(leptos::ev::hashchange, move |_| {
        store_navigate(&store, Location::parse(&current_hash()));
    });

    Effect::new(move |_| apply_theme(store.theme().get()));

    use_anchor_scroll(move || store.location().read().anchor.clone(), frames);

    let route = Memo::new(move |_| store.location().read().route);

    view! {
        <div class="page">
            <TopBar />
            <main>
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Library => view! { <LibraryPage /> }.into_any(),
                }}
            </main>
            <SiteFooter />
            <ShelfModal />
        </div>
    }
}
