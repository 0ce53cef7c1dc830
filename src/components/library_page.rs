//! Library Page Component
//!
//! Full shelf list: favorites first, with per-title favorite, edit and delete.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, NoteLine};
use crate::context::use_app_context;
use crate::models::ManhuaItem;
use crate::shell::Route;
use crate::store::{
    store_delete, store_open_create, store_open_edit, store_toggle_favorite, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn LibraryPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let ordered = Memo::new(move |_| store.shelf().read().display_order());

    view! {
        <section class="library-page">
            <div class="section-head">
                <p class="eyebrow">"Biblioteca"</p>
                <h1>"Sua estante completa"</h1>
                <p>"Favoritos aparecem primeiro. Edite, favorite ou remova o que quiser."</p>
            </div>

            <div class="library-toolbar">
                <button class="btn btn-primary" on:click=move |_| store_open_create(&store)>
                    "Adicionar manhuas"
                </button>
                <button
                    class="btn btn-light"
                    disabled=move || ordered.read().is_empty()
                    on:click=move |_| store_open_edit(&store, &ctx, ordered.get_untracked())
                >
                    "Editar em lote"
                </button>
            </div>
            <NoteLine />

            <Show
                when=move || !ordered.read().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"Sua estante está vazia."</p>
                        <a class="btn btn-link" href=Route::Home.href()>"Voltar ao início"</a>
                    </div>
                }
            >
                <ul class="library-list">
                    <For
                        each=move || ordered.get()
                        key=|item| (item.id.clone(), item.favorite, item.current_chapter, item.total_chapters, item.name.clone(), item.description.clone())
                        children=move |item| view! { <LibraryRow item=item /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn LibraryRow(item: ManhuaItem) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let id = StoredValue::new(item.id.clone());
    let edit_target = StoredValue::new(item.clone());
    let favorite_label = if item.favorite { "Remover dos favoritos" } else { "Favoritar" };
    let progress = format!("Cap. {} / {} - {}", item.current_chapter, item.total_chapters, item.status);

    view! {
        <li class="library-item" class:favorite=item.favorite>
            <div class="library-item-body">
                <p class="series-title">
                    {item.name.clone()}
                    {item.favorite.then(|| view! { <span class="series-badge">"Favorito"</span> })}
                </p>
                <p class="series-sub">{progress}</p>
                {(!item.description.is_empty()).then(|| view! {
                    <p class="series-desc">{item.description.clone()}</p>
                })}
            </div>
            <div class="library-item-actions">
                <button
                    class="icon-btn"
                    class:active=item.favorite
                    aria-label=favorite_label
                    aria-pressed=item.favorite.to_string()
                    on:click=move |_| id.with_value(|id| store_toggle_favorite(&store, &ctx, id))
                >
                    {if item.favorite { "★" } else { "☆" }}
                </button>
                <button
                    class="btn btn-link"
                    on:click=move |_| store_open_edit(&store, &ctx, vec![edit_target.get_value()])
                >
                    "Editar"
                </button>
                <DeleteConfirmButton
                    label=format!("Remover {}", item.name)
                    on_confirm=Callback::new(move |_| id.with_value(|id| store_delete(&store, &ctx, id)))
                />
            </div>
        </li>
    }
}
