//! Data URL helpers
//!
//! The browser encodes the selfie as `data:<mime>;base64,<payload>`; these
//! helpers pick that shape apart without allocating.

/// True if `value` looks like a complete data URL with a payload section.
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:") && value.contains(',')
}

/// MIME type of a data URL, e.g. `image/png`. None for malformed input.
pub fn mime_type(value: &str) -> Option<&str> {
    let rest = value.strip_prefix("data:")?;
    let header = rest.split(',').next()?;
    let mime = header.split(';').next()?;
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

/// Base64 payload of a data URL. None when there is no payload section.
pub fn base64_payload(value: &str) -> Option<&str> {
    value.split(',').nth(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_data_url("https://example.com/a.png"));
        assert!(!is_data_url("data:image/png;base64"));
        assert!(!is_data_url(""));
    }

    #[test]
    fn test_mime_type_jpeg() {
        assert_eq!(mime_type("data:image/jpeg;base64,/9j/4AAQ"), Some("image/jpeg"));
    }

    #[test]
    fn test_mime_type_webp() {
        assert_eq!(mime_type("data:image/webp;base64,UklGR"), Some("image/webp"));
    }

    #[test]
    fn test_mime_type_malformed() {
        assert_eq!(mime_type("not a data url"), None);
        assert_eq!(mime_type("data:;base64,AA=="), None);
    }

    #[test]
    fn test_base64_payload() {
        assert_eq!(base64_payload("data:image/png;base64,iVBORw0KGgo="), Some("iVBORw0KGgo="));
        assert_eq!(base64_payload("data:image/png;base64"), None);
    }
}
