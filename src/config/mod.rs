//! Configuration types for the DeansList API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DeansListConfig`]: Everything a client needs to reach one school
//! - [`DeansListConfigBuilder`]: A builder for constructing [`DeansListConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`Subdomain`]: A validated school subdomain
//! - [`BaseUrl`]: An optional base URL override
//!
//! # Example
//!
//! ```rust
//! use deanslist::{ApiKey, DeansListConfig, Subdomain};
//!
//! let config = DeansListConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .subdomain(Subdomain::new("acme").unwrap())
//!     .user_agent("MyDistrictSync/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://acme.deanslistsoftware.com");
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl, Subdomain};

use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the API key for [`DeansListConfig::from_env`].
pub const API_KEY_ENV: &str = "DEANSLIST_API_KEY";

/// Environment variable holding the subdomain for [`DeansListConfig::from_env`].
pub const SUBDOMAIN_ENV: &str = "DEANSLIST_SUBDOMAIN";

/// Configuration for a DeansList client.
///
/// # Thread Safety
///
/// `DeansListConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct DeansListConfig {
    api_key: ApiKey,
    subdomain: Subdomain,
    base_url: Option<BaseUrl>,
    user_agent: Option<String>,
    timeout: Duration,
}

impl DeansListConfig {
    /// Creates a new builder for constructing a `DeansListConfig`.
    #[must_use]
    pub fn builder() -> DeansListConfigBuilder {
        DeansListConfigBuilder::new()
    }

    /// Builds a configuration from `DEANSLIST_API_KEY` and `DEANSLIST_SUBDOMAIN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if either variable is unset, or
    /// the usual validation errors if a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::MissingEnvVar { name: API_KEY_ENV })?;
        let subdomain = std::env::var(SUBDOMAIN_ENV)
            .map_err(|_| ConfigError::MissingEnvVar { name: SUBDOMAIN_ENV })?;

        Self::builder()
            .api_key(ApiKey::new(api_key)?)
            .subdomain(Subdomain::new(subdomain)?)
            .build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the school subdomain.
    #[must_use]
    pub const fn subdomain(&self) -> &Subdomain {
        &self.subdomain
    }

    /// Returns the effective base URL.
    ///
    /// This is the configured override if one was set, otherwise
    /// `https://{subdomain}.deanslistsoftware.com`.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .as_ref()
            .map_or_else(|| self.subdomain.base_url(), |url| url.as_ref().to_string())
    }

    /// Returns the custom User-Agent, if configured.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Verify DeansListConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeansListConfig>();
};

/// Builder for constructing [`DeansListConfig`] instances.
///
/// Required fields are `api_key` and `subdomain`.
///
/// # Defaults
///
/// - `base_url`: derived from the subdomain
/// - `user_agent`: `None` (the library's own User-Agent is sent)
/// - `timeout`: [`DEFAULT_TIMEOUT`]
#[derive(Debug, Default)]
pub struct DeansListConfigBuilder {
    api_key: Option<ApiKey>,
    subdomain: Option<Subdomain>,
    base_url: Option<BaseUrl>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl DeansListConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the school subdomain (required).
    #[must_use]
    pub fn subdomain(mut self, subdomain: Subdomain) -> Self {
        self.subdomain = Some(subdomain);
        self
    }

    /// Overrides the base URL derived from the subdomain.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`DeansListConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `subdomain` are not set.
    pub fn build(self) -> Result<DeansListConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let subdomain = self
            .subdomain
            .ok_or(ConfigError::MissingRequiredField { field: "subdomain" })?;

        Ok(DeansListConfig {
            api_key,
            subdomain,
            base_url: self.base_url,
            user_agent: self.user_agent,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
