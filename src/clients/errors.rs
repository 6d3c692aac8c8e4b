//! HTTP-specific error types for the DeansList API client.
//!
//! [`HttpError`] covers everything that can go wrong between handing a
//! request to the transport and getting back a 2xx status: the host being
//! unreachable, the API key being rejected, the endpoint not existing on the
//! school's server, or any other non-success status.
//!
//! # Example
//!
//! ```rust,ignore
//! use deanslist::{DeansListError, HttpError};
//!
//! match client.get_users(&QueryParams::new()).await {
//!     Err(DeansListError::Http(HttpError::Connection { subdomain, .. })) => {
//!         println!("Is '{subdomain}' the right subdomain?");
//!     }
//!     Err(DeansListError::Http(HttpError::Response { status, body })) => {
//!         println!("Server said {status}: {body}");
//!     }
//!     _ => {}
//! }
//! ```

use thiserror::Error;

/// Unified error type for transport and HTTP status failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be delivered to the host.
    #[error("Unable to connect to {base_uri} - are you sure the subdomain '{subdomain}' is correct?")]
    Connection {
        /// The base URI the client was configured with.
        base_uri: String,
        /// The school subdomain the client was configured with.
        subdomain: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered 401.
    #[error("Unable to authenticate - are you sure the API key is correct?")]
    Authentication,

    /// The server answered 404.
    #[error("No such resource {path} - are you sure the endpoints were configured correctly?")]
    EndpointNotConfigured {
        /// The request path that was attempted.
        path: String,
    },

    /// The server answered with any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    Response {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// Any other transport failure (client construction, reading the body).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Maps a non-success status code to its error variant.
    #[must_use]
    pub fn from_status(status: u16, path: &str, body: String) -> Self {
        match status {
            401 => Self::Authentication,
            404 => Self::EndpointNotConfigured {
                path: path.to_string(),
            },
            _ => Self::Response { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_authentication() {
        let error = HttpError::from_status(401, "api/v1/terms", String::new());
        assert!(matches!(error, HttpError::Authentication));
        assert!(error.to_string().contains("API key"));
    }

    #[test]
    fn test_404_maps_to_endpoint_not_configured_with_path() {
        let error = HttpError::from_status(404, "api/v1/rosters/12", "nope".to_string());
        match &error {
            HttpError::EndpointNotConfigured { path } => assert_eq!(path, "api/v1/rosters/12"),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(error.to_string().contains("api/v1/rosters/12"));
    }

    #[test]
    fn test_other_status_keeps_status_and_body() {
        let error = HttpError::from_status(503, "api/v1/terms", "maintenance".to_string());
        match error {
            HttpError::Response { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let error: &dyn std::error::Error = &HttpError::Authentication;
        let _ = error;
    }
}
