//! Wire types for `POST /api/generate`
//!
//! Field names follow the backend's camelCase contract; response structs
//! tolerate missing fields via defaults.

use serde::{Deserialize, Serialize};

use crate::locations::LocationList;

/// Request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Self-contained data URL of the uploaded selfie.
    pub image_file: String,
    /// Trimmed, non-blank destination names.
    pub locations: Vec<String>,
    pub samples_per_location: u8,
}

impl GenerateRequest {
    /// Builds a request from the current form state, dropping blank
    /// location entries and clamping the sample count to the picker range.
    pub fn new(image_file: String, locations: &LocationList, samples_per_location: u8) -> Self {
        Self {
            image_file,
            locations: locations.valid(),
            samples_per_location: samples_per_location.clamp(1, 4),
        }
    }
}

/// Success response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateResponse {
    pub images: Vec<GeneratedImage>,
}

/// One generated image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedImage {
    pub url: String,
    /// The destination this image was generated for.
    pub location: String,
}

/// Error response body; `details` is honored for 500s.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_serialize_camel_case() {
        let request = GenerateRequest {
            image_file: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            locations: vec!["Paris".to_string(), "Tokyo".to_string()],
            samples_per_location: 3,
        };

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(json.contains("\"imageFile\":\"data:image/png;base64,iVBORw0KGgo=\""));
        assert!(json.contains("\"locations\":[\"Paris\",\"Tokyo\"]"));
        assert!(json.contains("\"samplesPerLocation\":3"));
    }

    #[test]
    fn test_generate_request_new_drops_blank_locations() {
        let mut locations = LocationList::default();
        locations.update(0, "  Paris  ");
        locations.add();
        locations.update(1, "   ");

        let request = GenerateRequest::new("data:image/png;base64,AA==".to_string(), &locations, 2);
        assert_eq!(request.locations, vec!["Paris".to_string()]);
    }

    #[test]
    fn test_generate_request_new_clamps_samples() {
        let mut locations = LocationList::default();
        locations.update(0, "Oslo");

        let request = GenerateRequest::new(String::new(), &locations, 0);
        assert_eq!(request.samples_per_location, 1);
        let request = GenerateRequest::new(String::new(), &locations, 9);
        assert_eq!(request.samples_per_location, 4);
    }

    #[test]
    fn test_generate_response_deserialize() {
        let json = r#"{
            "images": [
                { "url": "https://cdn.example/a.png", "location": "Paris" },
                { "url": "https://cdn.example/b.png", "location": "Tokyo" }
            ]
        }"#;

        let response: GenerateResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.images.len(), 2);
        assert_eq!(response.images[0].url, "https://cdn.example/a.png");
        assert_eq!(response.images[1].location, "Tokyo");
    }

    #[test]
    fn test_generate_response_missing_images_defaults_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").expect("deserialize failed");
        assert!(response.images.is_empty());
    }

    #[test]
    fn test_error_body_tolerates_arbitrary_shape() {
        let body: ErrorBody = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(body.details, None);

        let body: ErrorBody =
            serde_json::from_str(r#"{"details":"model cold","code":17}"#).expect("deserialize failed");
        assert_eq!(body.details.as_deref(), Some("model cold"));
    }
}
