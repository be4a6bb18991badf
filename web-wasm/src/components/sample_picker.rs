//! Samples-per-location picker

use leptos::prelude::*;

use selfie_at_common::SAMPLE_CHOICES;

#[component]
pub fn SamplePicker<F>(samples: ReadSignal<u8>, on_select: F) -> impl IntoView
where
    F: Fn(u8) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="sample-picker">
            {SAMPLE_CHOICES
                .into_iter()
                .map(|choice| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class=move || {
                                if samples.get() == choice {
                                    "sample-btn selected"
                                } else {
                                    "sample-btn"
                                }
                            }
                            on:click=move |_| on_select(choice)
                        >
                            {choice}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
