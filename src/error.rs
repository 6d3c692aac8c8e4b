//! Error types for the DeansList API client.
//!
//! This module contains [`ConfigError`], raised while building configuration
//! values, and [`DeansListError`], the single error type returned by every
//! client operation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Client operations return `Result<T, DeansListError>`,
//! which wraps configuration and transport errors and adds the endpoint and
//! envelope failures.
//!
//! # Example
//!
//! ```rust
//! use deanslist::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid DeansList API key.")]
    EmptyApiKey,

    /// Subdomain is invalid.
    #[error("Invalid subdomain '{subdomain}'. Expected format: 'school' or 'school.deanslistsoftware.com'.")]
    InvalidSubdomain {
        /// The invalid subdomain that was provided.
        subdomain: String,
    },

    /// Base URL override is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with an http or https scheme (e.g., 'https://proxy.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the environment variable.
        name: &'static str,
    },
}

/// Unified error type for DeansList client operations.
///
/// # Example
///
/// ```rust,ignore
/// use deanslist::{DeansListError, HttpError, QueryParams};
///
/// match client.get_behavior(&QueryParams::new()).await {
///     Ok(payload) => println!("{payload:?}"),
///     Err(DeansListError::Http(HttpError::Authentication)) => {
///         println!("Check the API key");
///     }
///     Err(DeansListError::MalformedResponse { reason }) => {
///         println!("Server broke its envelope contract: {reason}");
///     }
///     Err(e) => println!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum DeansListError {
    /// Configuration was rejected before any request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport or HTTP status failure.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response envelope violated the API contract.
    ///
    /// Raised when a declared row count does not match the length of its
    /// array, or when the envelope fields have the wrong JSON types.
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        /// What was wrong with the body.
        reason: String,
    },

    /// The requested resource name is not in the endpoint registry.
    #[error("DeansList has no \"{name}\" API endpoint.")]
    UnknownEndpoint {
        /// The name that was requested.
        name: String,
    },

    /// Wrong number of identifiers for the endpoint's cardinality.
    #[error("Endpoint '{endpoint}' takes {expected} identifier(s), {given} given.")]
    InvalidArguments {
        /// The endpoint name.
        endpoint: &'static str,
        /// Number of identifiers the endpoint accepts.
        expected: usize,
        /// Number of identifiers supplied.
        given: usize,
    },

    /// An identifier cannot be used as a single URL path segment.
    #[error(
        "Invalid identifier '{id}' for endpoint '{endpoint}'. Identifiers may only contain letters, digits, '-', '_', '.' and '~'."
    )]
    InvalidIdentifier {
        /// The endpoint name.
        endpoint: &'static str,
        /// The rejected identifier.
        id: String,
    },

    /// A query parameter is not accepted by the endpoint.
    #[error(
        "Invalid parameter '{key}' for endpoint '{endpoint}'. Valid parameters: {}",
        format_valid(.valid)
    )]
    InvalidParameter {
        /// The endpoint name.
        endpoint: &'static str,
        /// The rejected parameter key.
        key: String,
        /// The parameters the endpoint accepts.
        valid: &'static [&'static str],
    },

    /// Decoding a payload into a caller type failed.
    #[error("Failed to deserialize payload: {0}")]
    Deserialize(#[from] serde_json::Error),
}

fn format_valid(valid: &[&str]) -> String {
    if valid.is_empty() {
        "(none)".to_string()
    } else {
        valid.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("DeansList API key"));
    }

    #[test]
    fn test_invalid_subdomain_error_message() {
        let error = ConfigError::InvalidSubdomain {
            subdomain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        let message = error.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_parameter_lists_valid_keys() {
        let error = DeansListError::InvalidParameter {
            endpoint: "behavior",
            key: "bogus".to_string(),
            valid: &["sdt", "edt"],
        };
        let message = error.to_string();
        assert!(message.contains("'bogus'"));
        assert!(message.contains("behavior"));
        assert!(message.contains("sdt, edt"));
    }

    #[test]
    fn test_invalid_parameter_with_no_valid_keys() {
        let error = DeansListError::InvalidParameter {
            endpoint: "roster",
            key: "rt".to_string(),
            valid: &[],
        };
        assert!(error.to_string().ends_with("(none)"));
    }

    #[test]
    fn test_invalid_arguments_message() {
        let error = DeansListError::InvalidArguments {
            endpoint: "roster",
            expected: 1,
            given: 2,
        };
        assert_eq!(
            error.to_string(),
            "Endpoint 'roster' takes 1 identifier(s), 2 given."
        );
    }

    #[test]
    fn test_invalid_identifier_message() {
        let error = DeansListError::InvalidIdentifier {
            endpoint: "roster",
            id: "1?rt=ALL".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("'1?rt=ALL'"));
        assert!(message.contains("roster"));
    }

    #[test]
    fn test_config_error_converts_into_client_error() {
        let error: DeansListError = ConfigError::EmptyApiKey.into();
        assert!(matches!(
            error,
            DeansListError::Config(ConfigError::EmptyApiKey)
        ));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = DeansListError::UnknownEndpoint {
            name: "nope".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
