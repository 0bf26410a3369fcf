//! API utilities for frontend-backend communication
//!
//! URL construction and the error type shared by all API calls.

use crate::config::AppConfig;
use thiserror::Error;

/// Failure of a single API call.
///
/// The UI never distinguishes between variants; they exist for logging.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Parse(String),
    #[error("could not encode request body: {0}")]
    Serialize(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust
/// use frontend::config::AppConfig;
/// use frontend::shared::api_utils::api_url;
///
/// let config = AppConfig::default();
/// assert_eq!(api_url(&config, "/invoices"), "/api/invoices");
/// ```
pub fn api_url(config: &AppConfig, path: &str) -> String {
    format!("{}{}", config.api_base(), path)
}

/// URL of a single resource, with the id percent-encoded
pub fn resource_url(config: &AppConfig, collection: &str, id: &str) -> String {
    format!(
        "{}{}/{}",
        config.api_base(),
        collection,
        urlencoding::encode(id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_url_encodes_id() {
        let config = AppConfig::default().with_api_base(Some("https://x.test/api".into()));
        assert_eq!(
            resource_url(&config, "/invoices", "65a1/b c"),
            "https://x.test/api/invoices/65a1%2Fb%20c"
        );
        assert_eq!(api_url(&config, "/invoices"), "https://x.test/api/invoices");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::Status(404).to_string(), "server responded with HTTP 404");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
