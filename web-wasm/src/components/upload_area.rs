//! Selfie upload area
//!
//! Drag-and-drop or click to pick a single image. Candidates are validated
//! before any read; an accepted file is read to a data URL that doubles as
//! the preview source and the request payload. Accepting a new file
//! replaces the previous one.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement};

use selfie_at_common::{is_data_url, validate_candidate, Generation, UploadError};

use crate::app::SelfieImage;

#[component]
pub fn UploadArea<FA, FR, FC>(
    image: ReadSignal<Option<SelfieImage>>,
    generation: ReadSignal<Generation>,
    on_accepted: FA,
    on_rejected: FR,
    on_cleared: FC,
) -> impl IntoView
where
    FA: Fn(SelfieImage) + 'static + Clone + Send + Sync,
    FR: Fn(UploadError) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_accepted = on_accepted.clone();
        let on_rejected = on_rejected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if generation.with_untracked(|g| g.is_submitting()) {
                return;
            }

            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|f| f.get(0)) {
                accept_candidate(file, on_accepted.clone(), on_rejected.clone());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !generation.with_untracked(|g| g.is_submitting()) {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if generation.with_untracked(|g| g.is_submitting()) {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_file_picked = {
        let on_accepted = on_accepted.clone();
        let on_rejected = on_rejected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|f| f.get(0)) {
                accept_candidate(file, on_accepted.clone(), on_rejected.clone());
            }
            // allow picking the same file again after a clear
            input.set_value("");
        }
    };

    let on_clear = {
        let on_cleared = on_cleared.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            on_cleared(());
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if image.with(|i| i.is_some()) {
                    classes.push("has-image");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                class="file-input"
                accept="image/jpeg,image/png,image/webp"
                node_ref=file_input
                on:change=on_file_picked
                on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
            />

            <Show
                when=move || image.with(|i| i.is_some())
                fallback=|| {
                    view! {
                        <div class="upload-prompt">
                            <div class="upload-icon">"\u{1F4F7}"</div>
                            <p>"Drag & drop or click to upload"</p>
                            <p class="text-muted">"JPG, PNG, WEBP \u{2022} Max 10MB"</p>
                        </div>
                    }
                }
            >
                <img
                    class="upload-preview"
                    src=move || image.with(|i| i.as_ref().map(|s| s.data_url.clone()).unwrap_or_default())
                    alt=move || image.with(|i| i.as_ref().map(|s| s.file_name.clone()).unwrap_or_default())
                />

                <Show when=move || generation.with(|g| g.is_submitting())>
                    <div class="scan-overlay">
                        <div class="scan-line" />
                        <span class="scan-label">"ANALYZING IMAGE"</span>
                    </div>
                </Show>

                {
                    let on_clear = on_clear.clone();
                    view! {
                        <Show when=move || !generation.with(|g| g.is_submitting())>
                            <button class="clear-image" on:click=on_clear.clone()>
                                "\u{2715}"
                            </button>
                        </Show>
                    }
                }
            </Show>
        </div>
    }
}

/// Validates a candidate, then reads it to a data URL off the event path.
fn accept_candidate<FA, FR>(file: File, on_accepted: FA, on_rejected: FR)
where
    FA: Fn(SelfieImage) + 'static,
    FR: Fn(UploadError) + 'static,
{
    let byte_size = file.size() as u64;
    if let Err(err) = validate_candidate(&file.type_(), byte_size) {
        on_rejected(err);
        return;
    }

    let file_name = file.name();
    spawn_local(async move {
        let blob = gloo::file::File::from(file);
        match gloo::file::futures::read_as_data_url(&blob).await {
            Ok(data_url) if is_data_url(&data_url) => on_accepted(SelfieImage {
                file_name,
                byte_size,
                data_url,
            }),
            _ => on_rejected(UploadError::ReadFailed),
        }
    });
}
