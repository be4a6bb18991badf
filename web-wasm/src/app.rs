//! Application shell

use leptos::prelude::*;

use crate::components::{generator::Generator, landing::Landing};

/// Which of the two surfaces is on screen.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Landing,
    Generator,
}

/// The active selfie. The data URL is produced once, when the file is
/// accepted, and serves as both the preview source and the request payload.
#[derive(Clone, PartialEq)]
pub struct SelfieImage {
    pub file_name: String,
    pub byte_size: u64,
    pub data_url: String,
}

impl SelfieImage {
    pub fn size_mb(&self) -> f64 {
        self.byte_size as f64 / (1024.0 * 1024.0)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (surface, set_surface) = signal(Surface::Landing);

    view! {
        <Show
            when=move || surface.get() == Surface::Generator
            fallback=move || {
                view! { <Landing on_start=move |_| set_surface.set(Surface::Generator) /> }
            }
        >
            <Generator on_back=move |_| set_surface.set(Surface::Landing) />
        </Show>
    }
}
