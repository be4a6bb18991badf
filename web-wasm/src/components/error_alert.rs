//! Dismissible error banner
//!
//! One message slot for the whole surface; upload rejections and
//! generation failures share it, and a new message replaces the old one.

use leptos::prelude::*;

use selfie_at_common::Generation;

#[component]
pub fn ErrorAlert<F>(generation: ReadSignal<Generation>, on_dismiss: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || generation.with(|g| g.message().is_some())>
            <div class="error-alert">
                <div class="error-alert-body">
                    <p class="error-alert-title">"Generation Failed"</p>
                    <p class="error-alert-text">
                        {move || generation.with(|g| g.message().unwrap_or_default().to_string())}
                    </p>
                </div>
                <button
                    class="error-alert-dismiss"
                    on:click={
                        let on_dismiss = on_dismiss.clone();
                        move |_| on_dismiss(())
                    }
                >
                    "\u{2715}"
                </button>
            </div>
        </Show>
    }
}
