//! Error types
//!
//! Both enums render the exact copy shown to the user, so the UI layer
//! never formats messages itself.

use thiserror::Error;

/// Fallback shown for a 500 without a usable `details` body.
pub const SERVER_ERROR_FALLBACK: &str =
    "Server error. The AI model may be unavailable. Please try again.";

/// Fallback for transport failures that carry no message of their own.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// Client-side rejection of an upload candidate. Never sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Image must be less than 10MB")]
    TooLarge,

    #[error("Invalid file type. Please upload JPG, PNG, or WEBP")]
    UnsupportedType,

    #[error("Failed to read image file")]
    ReadFailed,
}

/// Failure of one generation attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid request. Please check your image and location.")]
    BadRequest,

    #[error("Authentication error. Please contact support.")]
    Unauthorized,

    /// 500-class failure; carries the server-supplied detail verbatim.
    #[error("{0}")]
    Server(String),

    /// Any other non-success status.
    #[error("Failed to generate images. Please try again.")]
    Upstream,

    /// Success status but an empty result list.
    #[error("No images were generated. Please try again.")]
    NoImages,

    #[error("Request timed out. The AI is busy. Please try again in a moment.")]
    Timeout,

    #[error("{0}")]
    Transport(String),
}

impl GenerateError {
    /// Classifies a non-success HTTP status.
    ///
    /// `details` is the optional `details` field of the error body; it is
    /// only honored for 500s, where the server's own wording wins.
    pub fn from_status(status: u16, details: Option<String>) -> Self {
        match status {
            400 => Self::BadRequest,
            401 | 403 => Self::Unauthorized,
            500 => match details.filter(|d| !d.trim().is_empty()) {
                Some(details) => Self::Server(details),
                None => Self::Server(SERVER_ERROR_FALLBACK.to_string()),
            },
            _ => Self::Upstream,
        }
    }

    /// Wraps a transport-layer message, substituting the generic copy when
    /// the underlying error had nothing to say.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Transport(UNEXPECTED_ERROR.to_string())
        } else {
            Self::Transport(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_messages() {
        assert_eq!(UploadError::TooLarge.to_string(), "Image must be less than 10MB");
        assert_eq!(
            UploadError::UnsupportedType.to_string(),
            "Invalid file type. Please upload JPG, PNG, or WEBP"
        );
    }

    #[test]
    fn test_from_status_bad_request() {
        let err = GenerateError::from_status(400, None);
        assert_eq!(err, GenerateError::BadRequest);
        assert!(err.to_string().contains("Invalid request"));
    }

    #[test]
    fn test_from_status_auth() {
        assert_eq!(GenerateError::from_status(401, None), GenerateError::Unauthorized);
        assert_eq!(GenerateError::from_status(403, None), GenerateError::Unauthorized);
    }

    #[test]
    fn test_from_status_server_detail_verbatim() {
        let err = GenerateError::from_status(500, Some("model overloaded".to_string()));
        assert_eq!(err.to_string(), "model overloaded");
    }

    #[test]
    fn test_from_status_server_blank_detail_falls_back() {
        let err = GenerateError::from_status(500, Some("   ".to_string()));
        assert_eq!(err.to_string(), SERVER_ERROR_FALLBACK);
        let err = GenerateError::from_status(500, None);
        assert_eq!(err.to_string(), SERVER_ERROR_FALLBACK);
    }

    #[test]
    fn test_from_status_other_is_generic() {
        for status in [404, 429, 502, 503] {
            assert_eq!(GenerateError::from_status(status, None), GenerateError::Upstream);
        }
        // details are ignored outside the 500 branch
        let err = GenerateError::from_status(502, Some("gateway detail".to_string()));
        assert_eq!(err, GenerateError::Upstream);
    }

    #[test]
    fn test_transport_empty_message_substituted() {
        assert_eq!(GenerateError::transport("").to_string(), UNEXPECTED_ERROR);
        assert_eq!(GenerateError::transport("connection reset").to_string(), "connection reset");
    }
}
