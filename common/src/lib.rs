//! SelfieAt Common Library
//!
//! Types and request-lifecycle logic shared by the web UI and native tests

pub mod data_url;
pub mod error;
pub mod lifecycle;
pub mod locations;
pub mod types;
pub mod upload;

pub use data_url::{base64_payload, is_data_url, mime_type};
pub use error::{GenerateError, UploadError};
pub use lifecycle::{
    expected_image_count, Event, Generation, Outcome, Phase, DEFAULT_SAMPLES_PER_LOCATION,
    GENERATION_TIMEOUT_MS, SAMPLE_CHOICES,
};
pub use locations::LocationList;
pub use types::{ErrorBody, GenerateRequest, GenerateResponse, GeneratedImage};
pub use upload::{validate_candidate, ACCEPTED_MIME_TYPES, MAX_IMAGE_BYTES};
