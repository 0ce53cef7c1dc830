//! Site Footer Component

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer" id="comunidade">
            <div>
                <p class="footer-title">"Manhua Hub"</p>
                <p>"Sua estante, seu ritmo. Tudo salvo neste navegador."</p>
            </div>
            <div class="footer-links">
                <a href="#descobrir">"Descobrir"</a>
                <a href="#colecoes">"Coleções"</a>
                <a href="#/biblioteca">"Biblioteca"</a>
            </div>
            {cfg!(debug_assertions).then(|| view! { <DebugLog /> })}
        </footer>
    }
}

/// Recent log lines, debug builds only
#[component]
fn DebugLog() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    view! {
        <details class="debug-log">
            <summary on:click=move |_| set_lines.set(rolling_logger::recent())>"Registro"</summary>
            <pre>{move || lines.get().join("\n")}</pre>
        </details>
    }
}
