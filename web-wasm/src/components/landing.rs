//! Marketing landing page
//!
//! Purely presentational; the only action it exposes is `on_start`.

use leptos::prelude::*;

#[component]
pub fn Landing<F>(on_start: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="landing">
            <PoweredByBanner />
            <Navbar on_start=on_start.clone() />
            <Hero on_start=on_start />
            <Showcase />
            <Steps />
            <footer class="landing-footer">
                <p>"\u{00A9} 2025 SelfieAt. All rights reserved."</p>
            </footer>
        </div>
    }
}

#[component]
fn PoweredByBanner() -> impl IntoView {
    view! {
        <div class="top-banner">
            <span class="text-muted">"Powered by"</span>
            <a
                href="https://fal.ai/models/fal-ai/nano-banana-pro/edit"
                target="_blank"
                rel="noopener noreferrer"
                class="banner-pill"
            >
                "\u{26A1} Nano Banana Pro"
            </a>
            <span class="text-muted">"via"</span>
            <a href="https://fal.ai" target="_blank" rel="noopener noreferrer" class="banner-pill">
                "fal.ai"
            </a>
        </div>
    }
}

#[component]
fn Navbar<F>(on_start: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <nav class="landing-nav">
            <div class="brand">
                <span class="brand-mark">"\u{2726}"</span>
                <span class="brand-name">"SelfieAt"</span>
            </div>
            <div class="nav-links">
                <a href="#features">"Features"</a>
                <a href="#showcase">"Showcase"</a>
                <a href="#pricing">"Pricing"</a>
            </div>
            <button
                class="btn btn-ghost"
                on:click={
                    let on_start = on_start.clone();
                    move |_| on_start(())
                }
            >
                "Launch App"
            </button>
        </nav>
    }
}

#[component]
fn Hero<F>(on_start: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <main class="hero">
            // floating destination names behind the headline
            <div class="hero-backdrop" aria-hidden="true">
                <span class="float-word">"Paris"</span>
                <span class="float-word">"\u{6771}\u{4EAC}"</span>
                <span class="float-word">"S\u{00E3}o Paulo"</span>
                <span class="float-word">"\u{C11C}\u{C6B8}"</span>
                <span class="float-word">"Mumbai"</span>
            </div>

            <h1 class="hero-title">
                <span class="gradient-text">"Teleport"</span>
                <br />
                "your "
                <em>"self(ies)"</em>
                <br />
                <span class="hero-title-dim">"anywhere."</span>
            </h1>

            <p class="hero-subtitle">
                "Upload a selfie, choose any location, and watch AI seamlessly merge you into stunning new scenes."
            </p>

            <button
                class="btn btn-primary hero-cta"
                on:click={
                    let on_start = on_start.clone();
                    move |_| on_start(())
                }
            >
                "\u{2728} Teleport Now \u{2192}"
            </button>
        </main>
    }
}

#[component]
fn Showcase() -> impl IntoView {
    view! {
        <section class="showcase" id="showcase">
            <h2>
                "One Photo. "
                <span class="gradient-text">"Infinite Destinations."</span>
            </h2>
            <p class="text-muted">
                "Upload once, teleport anywhere, instantly generate stunning variations."
            </p>
        </section>
    }
}

#[component]
fn Steps() -> impl IntoView {
    let steps = [
        (
            "01",
            "Upload Your Selfie",
            "One clear photo of yourself is all it takes",
        ),
        (
            "02",
            "Pick Your Destinations",
            "Name up to two places you want to appear, anywhere on Earth",
        ),
        (
            "03",
            "Watch AI Magic",
            "Our AI instantly merges you into photorealistic scenes in seconds",
        ),
    ];

    view! {
        <section class="steps" id="features">
            {steps
                .into_iter()
                .map(|(number, title, description)| {
                    view! {
                        <div class="step-card">
                            <span class="step-number">{number}</span>
                            <h3>{title}</h3>
                            <p class="text-muted">{description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
