//! Home Page Component
//!
//! Landing view: hero with shelf actions, live stats, recent titles,
//! feature cards and the reading feed.

use leptos::prelude::*;

use crate::components::{NoteLine, StatCard};
use crate::context::use_app_context;
use crate::models::{ACTIVITIES, FEATURES};
use crate::store::{
    store_import, store_note, store_open_create, store_open_edit, use_app_store, AppStateStoreFields,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let recent_limit = ctx.config(|c| c.recent_limit);

    let stats = Memo::new(move |_| store.shelf().read().stats());
    let recent = Memo::new(move |_| store.shelf().read().recent(recent_limit));

    view! {
        <section class="hero" id="biblioteca">
            <div class="hero-copy">
                <p class="eyebrow reveal">"Seu hub de manhuas"</p>
                <h1 class="reveal delay-1">"Organize sua lista, capítulo por capítulo."</h1>
                <p class="lead reveal delay-2">
                    "Crie estantes personalizadas e marque manualmente o que você leu, "
                    "mantendo o ritmo das suas séries favoritas em um só lugar."
                </p>
                <div class="hero-actions reveal delay-3">
                    <button class="btn btn-primary" on:click=move |_| store_open_create(&store)>
                        "Criar minha estante"
                    </button>
                    <button class="btn btn-light" on:click=move |_| store_import(&store, &ctx)>
                        "Importar lista"
                    </button>
                </div>
                <NoteLine />
                <div class="signal-row reveal delay-4">
                    <span>"Atualização manual"</span>
                    <span>"Progresso por capítulo"</span>
                    <span>"Listas pessoais"</span>
                </div>
            </div>

            <div class="hero-card">
                <div class="library-card">
                    <div class="library-header">
                        <div>
                            <p class="cap-title">"Sua biblioteca agora"</p>
                            <p class="cap-sub">"Atualizada por você"</p>
                        </div>
                        <span class="status-pill">"Manual"</span>
                    </div>
                    <div class="cap-body">
                        <For
                            each=move || stats.get()
                            key=|stat| (stat.label.clone(), stat.value.clone(), stat.trend.clone())
                            children=move |stat| view! { <StatCard stat=stat /> }
                        />
                    </div>
                    <div class="library-subtitle">"Últimos atualizados"</div>
                    <div class="shelf-grid">
                        <Show
                            when=move || !recent.read().is_empty()
                            fallback=|| view! { <p class="cap-sub">"Sem manhuas ainda."</p> }
                        >
                            {move || recent.get().into_iter().enumerate().map(|(index, item)| view! {
                                <div class="series-item">
                                    <span class=format!("series-cover tone-{}", index % 4 + 1) />
                                    <div>
                                        <p class="series-title">
                                            {item.name.clone()}
                                            {item.favorite.then(|| view! { <span class="series-badge">"Favorito"</span> })}
                                        </p>
                                        <p class="series-sub">
                                            {format!("Cap. {} / {} - {}", item.current_chapter, item.total_chapters, item.status)}
                                        </p>
                                    </div>
                                </div>
                            }).collect_view()}
                        </Show>
                    </div>
                    <div class="cap-foot">
                        <div>
                            <p class="cap-label">"Últimos lidos"</p>
                            <p class="cap-value">{move || format!("{} hoje", recent.read().len())}</p>
                        </div>
                        <button
                            class="btn btn-primary btn-compact"
                            on:click=move |_| store_open_edit(&store, &ctx, recent.get_untracked())
                        >
                            "Editar estante"
                        </button>
                    </div>
                </div>
            </div>
        </section>

        <section class="grid-section" id="descobrir">
            <div class="section-head">
                <h2>"Uma casa para seu ritual de leitura."</h2>
                <p>
                    "Aqui você registra seu progresso manualmente, sem depender de APIs "
                    "externas para dizer o que mudou."
                </p>
            </div>
            <div class="feature-grid">
                {FEATURES.iter().map(|feature| {
                    let title = feature.title;
                    view! {
                        <article class="feature-card">
                            <h3>{title}</h3>
                            <p>{feature.detail}</p>
                            <button
                                class="btn btn-link"
                                on:click=move |_| store_note(&store, &ctx, format!("{} chega em breve.", title))
                            >
                                "Explorar"
                            </button>
                        </article>
                    }
                }).collect_view()}
            </div>
        </section>

        <section class="timeline" id="colecoes">
            <div class="timeline-card">
                <div>
                    <p class="eyebrow">"Registro recente"</p>
                    <h2>"Seu feed de leitura vive aqui."</h2>
                </div>
                <div class="timeline-list">
                    {ACTIVITIES.iter().map(|activity| view! {
                        <div>
                            <p class="timeline-title">{activity.title}</p>
                            <p>{activity.detail}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
