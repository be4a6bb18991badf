//! Generation surface
//!
//! Owns all interactive state for one session: the active selfie, the
//! destination list, the sample count, and the request lifecycle. Every
//! callback forwards a lifecycle event; the submit handler is the only
//! place a request leaves the app.

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use selfie_at_common::{
    expected_image_count, mime_type, Event, GenerateRequest, Generation, LocationList, UploadError,
    DEFAULT_SAMPLES_PER_LOCATION, GENERATION_TIMEOUT_MS,
};

use crate::api::generate::generate_with_deadline;
use crate::app::SelfieImage;
use crate::components::{
    error_alert::ErrorAlert, header::Header, location_editor::LocationEditor,
    results_gallery::ResultsGallery, sample_picker::SamplePicker, upload_area::UploadArea,
};

#[component]
pub fn Generator<F>(on_back: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (image, set_image) = signal(None::<SelfieImage>);
    let (locations, set_locations) = signal(LocationList::default());
    let (samples, set_samples) = signal(DEFAULT_SAMPLES_PER_LOCATION);
    let (generation, set_generation) = signal(Generation::default());

    let expected = move || locations.with(|l| expected_image_count(l, samples.get()));
    let can_generate = move || {
        let has_image = image.with(|i| i.is_some());
        locations.with(|l| generation.with(|g| g.can_submit(has_image, l)))
    };

    let on_image_accepted = move |selfie: SelfieImage| {
        set_image.set(Some(selfie));
        set_generation.update(|g| g.apply(Event::ImageAccepted));
    };
    let on_image_rejected = move |err: UploadError| {
        set_generation.update(|g| g.apply(Event::ImageRejected(err)));
    };
    let on_image_cleared = move |_: ()| {
        set_image.set(None);
        set_generation.update(|g| g.apply(Event::ImageCleared));
    };

    let on_location_add = move |_: ()| set_locations.update(|l| l.add());
    let on_location_remove = move |index: usize| set_locations.update(|l| l.remove(index));
    let on_location_update =
        move |index: usize, value: String| set_locations.update(|l| l.update(index, &value));

    let on_samples_selected = move |choice: u8| set_samples.set(choice);
    let on_dismiss = move |_: ()| set_generation.update(|g| g.apply(Event::MessageDismissed));

    let on_generate = move |_| {
        let Some(selfie) = image.get_untracked() else {
            return;
        };
        let current_locations = locations.get_untracked();
        if !generation.with_untracked(|g| g.can_submit(true, &current_locations)) {
            return;
        }

        let samples_per_location = samples.get_untracked();
        let expected = expected_image_count(&current_locations, samples_per_location);
        set_generation.update(|g| g.apply(Event::Submitted { expected }));
        let token = generation.with_untracked(|g| g.token());

        let request =
            GenerateRequest::new(selfie.data_url, &current_locations, samples_per_location);
        console::log!(
            "submitting generation request:",
            request.locations.len() as u32,
            "location(s),",
            mime_type(&request.image_file).unwrap_or("unknown mime")
        );

        spawn_local(async move {
            let resolution = generate_with_deadline(&request, GENERATION_TIMEOUT_MS).await;
            set_generation.update(|g| {
                g.apply(match resolution {
                    Some(outcome) => Event::Resolved { token, outcome },
                    None => Event::DeadlineElapsed { token },
                })
            });
        });
    };

    view! {
        <div class="generator">
            <Header on_back=on_back />

            <div class="generator-layout">
                <div class="generator-form">
                    <ErrorAlert generation=generation on_dismiss=on_dismiss />

                    <section class="form-section">
                        <div class="section-head">
                            <h2>
                                <span class="step-badge">"1"</span>
                                " Upload Selfie"
                            </h2>
                            <Show when=move || image.with(|i| i.is_some())>
                                <span class="size-badge">
                                    {move || {
                                        image.with(|i| {
                                            i.as_ref()
                                                .map(|s| format!("{:.1}MB", s.size_mb()))
                                                .unwrap_or_default()
                                        })
                                    }}
                                </span>
                            </Show>
                        </div>
                        <UploadArea
                            image=image
                            generation=generation
                            on_accepted=on_image_accepted
                            on_rejected=on_image_rejected
                            on_cleared=on_image_cleared
                        />
                    </section>

                    <section class="form-section">
                        <div class="section-head">
                            <h2>
                                <span class="step-badge">"2"</span>
                                " Choose Destinations"
                            </h2>
                            <span class="fill-badge">
                                {move || {
                                    locations.with(|l| {
                                        format!("{}/{} Filled", l.filled_count(), l.len())
                                    })
                                }}
                            </span>
                        </div>
                        <LocationEditor
                            locations=locations
                            on_add=on_location_add
                            on_remove=on_location_remove
                            on_update=on_location_update
                        />
                    </section>

                    <section class="form-section">
                        <div class="section-head">
                            <h2>
                                <span class="step-badge">"3"</span>
                                " Samples Per Location"
                            </h2>
                            <span class="total-badge">
                                {move || format!("{} Total Photos", expected())}
                            </span>
                        </div>
                        <SamplePicker samples=samples on_select=on_samples_selected />
                        <p class="samples-hint">
                            {move || {
                                let n = samples.get();
                                format!(
                                    "Each location will generate {} {}",
                                    n,
                                    if n == 1 { "photo" } else { "photos" },
                                )
                            }}
                        </p>
                    </section>

                    <button
                        class="btn btn-primary generate-btn"
                        disabled=move || !can_generate()
                        on:click=on_generate
                    >
                        {move || {
                            generation.with(|g| {
                                if g.is_submitting() {
                                    format!("Generating {} Variants...", g.expected_count())
                                } else {
                                    "Generate Photos".to_string()
                                }
                            })
                        }}
                    </button>
                </div>

                <ResultsGallery generation=generation />
            </div>
        </div>
    }
}
