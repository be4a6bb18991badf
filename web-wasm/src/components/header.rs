//! Generator navigation bar

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_back: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <nav class="generator-nav">
            <button
                class="back-link"
                on:click={
                    let on_back = on_back.clone();
                    move |_| on_back(())
                }
            >
                "\u{2190} Back"
            </button>
            <div class="brand">
                <span class="brand-mark">"\u{2726}"</span>
                <span class="brand-name">"SelfieAt"</span>
            </div>
            <div class="nav-spacer" />
        </nav>
    }
}
