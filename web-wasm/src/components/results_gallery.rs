//! Results gallery
//!
//! Pure function of the lifecycle snapshot: placeholder tiles while a
//! request is in flight (one per promised image), result tiles in server
//! response order after success, an empty state otherwise.

use leptos::prelude::*;

use selfie_at_common::{GeneratedImage, Generation};

#[component]
pub fn ResultsGallery(generation: ReadSignal<Generation>) -> impl IntoView {
    view! {
        <div class="results-panel">
            <div class="results-header">
                <h2>"Results Gallery"</h2>
                <Show when=move || {
                    generation.with(|g| g.is_submitting() || !g.results().is_empty())
                }>
                    <span class="results-count">
                        {move || {
                            generation.with(|g| {
                                if g.is_submitting() {
                                    format!("Generating {}", g.expected_count())
                                } else {
                                    format!("{} Generated", g.results().len())
                                }
                            })
                        }}
                    </span>
                </Show>
            </div>

            <Show
                when=move || generation.with(|g| g.is_submitting())
                fallback=move || {
                    view! {
                        <Show
                            when=move || generation.with(|g| !g.results().is_empty())
                            fallback=|| {
                                view! {
                                    <div class="results-empty">
                                        <div class="results-empty-icon">"\u{2728}"</div>
                                        <p>"Generated masterpieces will appear here."</p>
                                    </div>
                                }
                            }
                        >
                            <div class="results-grid">
                                <For
                                    each=move || {
                                        generation
                                            .with(|g| g.results().to_vec())
                                            .into_iter()
                                            .enumerate()
                                    }
                                    key=|(index, _)| *index
                                    children=|(index, result)| {
                                        view! { <ResultTile index=index result=result /> }
                                    }
                                />
                            </div>
                        </Show>
                    }
                }
            >
                <div class="results-grid">
                    {move || {
                        (0..generation.with(|g| g.expected_count()))
                            .map(|_| {
                                view! {
                                    <div class="placeholder-card">
                                        <div class="placeholder-spinner" />
                                        <p class="text-muted">"Processing..."</p>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ResultTile(index: usize, result: GeneratedImage) -> impl IntoView {
    view! {
        <div class="result-card">
            <img src=result.url.clone() alt=format!("Generated result {}", index + 1) />
            <span class="result-watermark">"SelfieAt.ai"</span>
            <div class="result-overlay">
                <p class="result-location">
                    <span class="location-pin">"\u{1F4CD}"</span>
                    {result.location.clone()}
                </p>
                <a
                    class="btn btn-download"
                    href=result.url.clone()
                    download=""
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Download"
                </a>
            </div>
        </div>
    }
}
