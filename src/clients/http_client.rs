//! HTTP client for DeansList API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the connection
//! pool, the credential and the default headers for one school.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiKey, DeansListConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query parameter carrying the API key on every request.
pub const API_KEY_PARAM: &str = "apikey";

/// HTTP client for making requests to the DeansList API.
///
/// The client handles:
/// - Base URI construction from the subdomain or a configured override
/// - Default `Accept` and `User-Agent` headers
/// - Attaching the API key as the `apikey` query parameter
/// - Mapping transport failures and non-2xx statuses to [`HttpError`]
///
/// Requests are attempted exactly once and bounded by the configured timeout.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://acme.deanslistsoftware.com`).
    base_uri: String,
    /// School subdomain, kept for connection error messages.
    subdomain: String,
    /// Credential sent with every request.
    api_key: ApiKey,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &DeansListConfig) -> Result<Self, HttpError> {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = config.user_agent().map_or_else(
            || format!("DeansList API Library v{SDK_VERSION} | Rust {rust_version}"),
            str::to_string,
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_uri: config.base_url(),
            subdomain: config.subdomain().to_string(),
            api_key: config.api_key().clone(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the school subdomain for this client.
    #[must_use]
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to the DeansList API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The request cannot be delivered (`Connection`)
    /// - The server does not answer within the timeout (`Network`)
    /// - The server answers 401 (`Authentication`)
    /// - The server answers 404 (`EndpointNotConfigured`)
    /// - The server answers any other non-2xx status (`Response`)
    /// - The response body cannot be read (`Network`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = format!("{}/{}", self.base_uri, request.path);

        // Caller params only; the API key never reaches the logs.
        tracing::debug!("Hitting url: {} with params: {:?}", url, request.query);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder
            .query(&request.query)
            .query(&[(API_KEY_PARAM, self.api_key.as_ref())]);

        let res = req_builder.send().await.map_err(|source| {
            if source.is_timeout() {
                tracing::error!("Request to {} timed out", url);
                HttpError::Network(source)
            } else {
                HttpError::Connection {
                    base_uri: self.base_uri.clone(),
                    subdomain: self.subdomain.clone(),
                    source,
                }
            }
        })?;

        let code = res.status().as_u16();
        let body_text = res.text().await?;

        if !(200..300).contains(&code) {
            return Err(HttpError::from_status(code, &request.path, body_text));
        }

        Ok(HttpResponse::from_text(code, &body_text))
    }
}
