//! Upload candidate validation

use crate::error::UploadError;

/// Hard cap on the selfie payload.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted declared MIME types.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Accepts a candidate file iff it fits the size cap and carries an
/// accepted MIME type. Size is checked first so an oversized file of the
/// wrong type reports the size problem.
pub fn validate_candidate(mime: &str, byte_size: u64) -> Result<(), UploadError> {
    if byte_size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge);
    }
    let mime = mime.trim();
    if !ACCEPTED_MIME_TYPES.iter().any(|t| t.eq_ignore_ascii_case(mime)) {
        return Err(UploadError::UnsupportedType);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_each_supported_type() {
        for mime in ACCEPTED_MIME_TYPES {
            assert_eq!(validate_candidate(mime, 1024), Ok(()));
        }
    }

    #[test]
    fn test_accepts_exactly_at_cap() {
        assert_eq!(validate_candidate("image/jpeg", MAX_IMAGE_BYTES), Ok(()));
    }

    #[test]
    fn test_rejects_over_cap() {
        assert_eq!(
            validate_candidate("image/jpeg", MAX_IMAGE_BYTES + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        assert_eq!(validate_candidate("image/gif", 1024), Err(UploadError::UnsupportedType));
        assert_eq!(validate_candidate("application/pdf", 1024), Err(UploadError::UnsupportedType));
        assert_eq!(validate_candidate("", 1024), Err(UploadError::UnsupportedType));
    }

    #[test]
    fn test_size_check_wins_over_type_check() {
        assert_eq!(
            validate_candidate("image/gif", MAX_IMAGE_BYTES + 1),
            Err(UploadError::TooLarge)
        );
    }

    #[test]
    fn test_mime_match_is_case_insensitive() {
        assert_eq!(validate_candidate("IMAGE/JPEG", 1024), Ok(()));
        assert_eq!(validate_candidate(" image/webp ", 1024), Ok(()));
    }
}
