//! Shelf Modal Component
//!
//! Create/edit dialog. Create asks for a count first, then shows one row per
//! title; edit opens straight on the rows of the chosen items.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{FormMode, FormRow, FormStep, RowField};
use crate::store::{
    store_close_form, store_confirm_count, store_set_count, store_submit_form, store_update_row,
    use_app_store, AppStateStoreFields,
};

/// Which screen the modal shows. Keyed coarsely so typing never rebuilds the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Closed,
    Count,
    Rows(FormMode, usize),
}

#[component]
pub fn ShelfModal() -> impl IntoView {
    let store = use_app_store();

    let stage = Memo::new(move |_| match store.form().read().step() {
        FormStep::Closed => Stage::Closed,
        FormStep::CountSelection { .. } => Stage::Count,
        FormStep::Editing { mode, rows } => Stage::Rows(*mode, rows.len()),
    });

    view! {
        <Show when=move || stage.get() != Stage::Closed>
            <div class="modal-backdrop" on:click=move |_| store_close_form(&store)>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev| ev.stop_propagation()
                >
                    {move || match stage.get() {
                        Stage::Closed => ().into_any(),
                        Stage::Count => view! { <CountStep /> }.into_any(),
                        Stage::Rows(mode, count) => view! { <RowsStep mode=mode count=count /> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CountStep() -> impl IntoView {
    let store = use_app_store();
    let max = store.form().read_untracked().max_batch();

    let count_input = move || match store.form().read().step() {
        FormStep::CountSelection { count_input } => count_input.clone(),
        _ => String::new(),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store_confirm_count(&store);
    };

    view! {
        <form class="modal-body" on:submit=on_submit>
            <h2>"Nova estante"</h2>
            <label class="field">
                <span>"Quantos manhuas você quer adicionar?"</span>
                <input
                    type="number"
                    min="1"
                    max=max.to_string()
                    step="1"
                    prop:value=count_input
                    on:input=move |ev| store_set_count(&store, event_target_value(&ev))
                />
            </label>
            <p class="field-hint">{format!("Até {} por vez.", max)}</p>
            <div class="modal-actions">
                <button type="button" class="btn btn-light" on:click=move |_| store_close_form(&store)>
                    "Cancelar"
                </button>
                <button type="submit" class="btn btn-primary">"Continuar"</button>
            </div>
        </form>
    }
}

#[component]
fn RowsStep(mode: FormMode, count: usize) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let (title, submit_label) = match mode {
        FormMode::Create => ("Nova estante", "Salvar estante"),
        FormMode::Edit => ("Editar estante", "Salvar alterações"),
    };
    let error = move || store.form().read().error().map(|e| e.to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store_submit_form(&store, &ctx);
    };

    view! {
        <form class="modal-body" on:submit=on_submit novalidate=true>
            <h2>{title}</h2>
            <div class="row-list">
                {(0..count).map(|index| view! { <RowFields index=index mode=mode /> }).collect_view()}
            </div>
            {move || error().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
            <div class="modal-actions">
                <button type="button" class="btn btn-light" on:click=move |_| store_close_form(&store)>
                    "Cancelar"
                </button>
                <button type="submit" class="btn btn-primary">{submit_label}</button>
            </div>
        </form>
    }
}

#[component]
fn RowFields(index: usize, mode: FormMode) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let limit = ctx.config(|c| c.description_limit);

    let field = move |read: fn(&FormRow) -> &String| {
        move || store.form().read().rows().get(index).map(|row| read(row).clone()).unwrap_or_default()
    };
    let description_len = move || {
        store.form().read().rows().get(index).map(|row| row.description.chars().count()).unwrap_or(0)
    };
    let update = move |field: RowField| {
        move |ev: leptos::ev::Event| store_update_row(&store, index, field, event_target_value(&ev))
    };

    let current_hint = match (mode, index) {
        (FormMode::Edit, _) => "Em branco mantém o atual",
        (FormMode::Create, 0) => "Em branco usa o total",
        (FormMode::Create, _) => "Em branco repete o anterior",
    };

    view! {
        <fieldset class="row-fields">
            <legend>{format!("Manhua {}", index + 1)}</legend>
            <label class="field">
                <span>"Nome"</span>
                <input type="text" prop:value=field(|row| &row.name) on:input=update(RowField::Name) />
            </label>
            <label class="field">
                <span>"Descrição"</span>
                <textarea
                    rows="2"
                    maxlength=limit.to_string()
                    prop:value=field(|row| &row.description)
                    on:input=update(RowField::Description)
                />
                <small class="field-hint">{move || format!("{}/{}", description_len(), limit)}</small>
            </label>
            <div class="field-pair">
                <label class="field">
                    <span>"Total de capítulos"</span>
                    <input
                        type="number"
                        min="1"
                        step="1"
                        prop:value=field(|row| &row.total_chapters)
                        on:input=update(RowField::TotalChapters)
                    />
                </label>
                <label class="field">
                    <span>"Capítulo atual"</span>
                    <input
                        type="number"
                        min="0"
                        step="1"
                        placeholder=current_hint
                        prop:value=field(|row| &row.current_chapter)
                        on:input=update(RowField::CurrentChapter)
                    />
                </label>
            </div>
        </fieldset>
    }
}
