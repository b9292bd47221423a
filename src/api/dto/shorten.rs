//! Request and response bodies for the creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Creation request: the long URL to shorten.
///
/// The URL must be a syntactically valid absolute URL with a scheme. No
/// further validation (reachability, scheme allow-list) is performed.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(url(message = "must be an absolute URL"))]
    pub url: String,
}

/// Creation response: the generated code and the fully-qualified short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_absolute_url_passes() {
        let request = ShortenRequest {
            url: "https://example.com/page?q=1".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_relative_url_fails() {
        let request = ShortenRequest {
            url: "not-a-url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_scheme_fails() {
        let request = ShortenRequest {
            url: "example.com/page".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
