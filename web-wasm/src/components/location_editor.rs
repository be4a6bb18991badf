//! Destination list editor
//!
//! One to two free-text slots. The list itself lives in `common`; this
//! component only renders it and forwards edits.

use leptos::prelude::*;

use selfie_at_common::locations::{MAX_LOCATIONS, MAX_LOCATION_LEN};
use selfie_at_common::LocationList;

#[component]
pub fn LocationEditor<FA, FR, FU>(
    locations: ReadSignal<LocationList>,
    on_add: FA,
    on_remove: FR,
    on_update: FU,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(usize) + 'static + Clone + Send + Sync,
    FU: Fn(usize, String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="location-editor">
            <For
                each=move || 0..locations.with(|l| l.len())
                key=|index| *index
                children=move |index| {
                    let on_remove = on_remove.clone();
                    let on_update = on_update.clone();
                    view! {
                        <div class="location-row">
                            <span class="location-pin">"\u{1F4CD}"</span>
                            <input
                                type="text"
                                class="location-input"
                                placeholder=format!("Location {} (e.g. Paris, Tokyo)", index + 1)
                                maxlength=MAX_LOCATION_LEN.to_string()
                                prop:value=move || {
                                    locations.with(|l| {
                                        l.entries().get(index).cloned().unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| on_update(index, event_target_value(&ev))
                            />
                            <Show when=move || locations.with(|l| l.len() > 1)>
                                <button
                                    class="location-remove"
                                    on:click={
                                        let on_remove = on_remove.clone();
                                        move |_| on_remove(index)
                                    }
                                >
                                    "\u{1F5D1}"
                                </button>
                            </Show>
                        </div>
                    }
                }
            />

            <Show when=move || locations.with(|l| l.len() < MAX_LOCATIONS)>
                <button
                    class="location-add"
                    on:click={
                        let on_add = on_add.clone();
                        move |_| on_add(())
                    }
                >
                    "+ Add Another Location"
                </button>
            </Show>
        </div>
    }
}
