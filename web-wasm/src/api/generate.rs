//! Generation API call
//!
//! One POST to `/api/generate`. Non-success statuses are classified into
//! [`GenerateError`] categories; the caller races the call against the
//! client-side deadline via [`generate_with_deadline`].

use futures::future::{select, Either};
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use selfie_at_common::{ErrorBody, GenerateError, GenerateRequest, GenerateResponse, Outcome};

pub const GENERATE_ENDPOINT: &str = "/api/generate";

/// Issues the call and classifies the result. An empty image list is
/// returned as-is; the lifecycle turns it into a failure.
pub async fn generate(request: &GenerateRequest) -> Outcome {
    let body =
        serde_json::to_string(request).map_err(|e| GenerateError::transport(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(GENERATE_ENDPOINT, &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| GenerateError::transport("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    console::log!("backend response status:", resp.status());

    if !resp.ok() {
        let details = read_error_details(&resp).await;
        return Err(GenerateError::from_status(resp.status(), details));
    }

    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    let parsed: GenerateResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| GenerateError::transport(e.to_string()))?;

    Ok(parsed.images)
}

/// Races the call against the deadline. `None` means the deadline elapsed
/// first; the in-flight call is dropped on the spot, so a late response
/// has nowhere to land.
pub async fn generate_with_deadline(request: &GenerateRequest, deadline_ms: u32) -> Option<Outcome> {
    let call = Box::pin(generate(request));
    let deadline = Box::pin(TimeoutFuture::new(deadline_ms));

    match select(call, deadline).await {
        Either::Left((outcome, _)) => Some(outcome),
        Either::Right(((), _)) => None,
    }
}

/// Best-effort read of the error body's `details` field; any parse problem
/// just means no detail.
async fn read_error_details(resp: &Response) -> Option<String> {
    let json = JsFuture::from(resp.json().ok()?).await.ok()?;
    let body: ErrorBody = serde_wasm_bindgen::from_value(json).ok()?;
    body.details
}

fn transport(err: JsValue) -> GenerateError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_default();
    GenerateError::transport(message)
}
