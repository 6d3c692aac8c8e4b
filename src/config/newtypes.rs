//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated DeansList API key.
///
/// The key is sent as the `apikey` query parameter on every request. It is
/// never validated against the server here, only checked to be non-empty.
///
/// # Security
///
/// The `Debug` implementation masks the key, displaying only
/// `ApiKey(*****)`, so it does not leak into logs.
///
/// # Example
///
/// ```rust
/// use deanslist::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated DeansList school subdomain.
///
/// # Accepted Formats
///
/// - `school` - used as-is
/// - `school.deanslistsoftware.com` - normalized to `school`
///
/// # Example
///
/// ```rust
/// use deanslist::Subdomain;
///
/// let subdomain = Subdomain::new("acme").unwrap();
/// assert_eq!(subdomain.as_ref(), "acme");
/// assert_eq!(subdomain.host(), "acme.deanslistsoftware.com");
///
/// let subdomain = Subdomain::new("Acme.DeansListSoftware.com").unwrap();
/// assert_eq!(subdomain.as_ref(), "acme");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subdomain(String);

impl Subdomain {
    /// The vendor host every school subdomain lives under.
    pub const VENDOR_HOST: &'static str = "deanslistsoftware.com";

    /// Creates a new validated subdomain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSubdomain`] if the subdomain is invalid.
    pub fn new(subdomain: impl Into<String>) -> Result<Self, ConfigError> {
        let subdomain: String = subdomain.into();
        let subdomain = subdomain.trim().to_lowercase();

        let name = subdomain
            .strip_suffix(Self::VENDOR_HOST)
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(&subdomain);

        if !Self::is_valid_name(name) {
            return Err(ConfigError::InvalidSubdomain { subdomain });
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the full host name, e.g. `acme.deanslistsoftware.com`.
    #[must_use]
    pub fn host(&self) -> String {
        format!("{}.{}", self.0, Self::VENDOR_HOST)
    }

    /// Returns the default base URL, e.g. `https://acme.deanslistsoftware.com`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host())
    }

    fn is_valid_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Subdomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Subdomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL overriding the subdomain-derived host.
///
/// Useful when requests must go through a proxy or a local test server.
/// A trailing slash is stripped so paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use deanslist::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.host_name(), "127.0.0.1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the scheme is not `http` or
    /// `https`, or the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.scheme_end + 3..self.host_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
        assert!(matches!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_api_key_masks_value_in_debug() {
        let key = ApiKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "ApiKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_subdomain_short_form() {
        let subdomain = Subdomain::new("acme").unwrap();
        assert_eq!(subdomain.as_ref(), "acme");
        assert_eq!(subdomain.base_url(), "https://acme.deanslistsoftware.com");
    }

    #[test]
    fn test_subdomain_full_host_is_normalized() {
        let subdomain = Subdomain::new("  ACME.deanslistsoftware.com ").unwrap();
        assert_eq!(subdomain.as_ref(), "acme");
    }

    #[test]
    fn test_subdomain_rejects_invalid_values() {
        for bad in ["", "-acme", "acme-", "ac me", "acme.example.com", "deanslistsoftware.com"] {
            assert!(
                matches!(Subdomain::new(bad), Err(ConfigError::InvalidSubdomain { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_subdomain_serde_round_trip() {
        let subdomain = Subdomain::new("my-school").unwrap();
        let json = serde_json::to_string(&subdomain).unwrap();
        assert_eq!(json, r#""my-school""#);

        let parsed: Subdomain = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, subdomain);

        let invalid: Result<Subdomain, _> = serde_json::from_str(r#""not valid""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let url = BaseUrl::new("https://proxy.example.com/").unwrap();
        assert_eq!(url.as_ref(), "https://proxy.example.com");
        assert_eq!(url.host_name(), "proxy.example.com");
    }

    #[test]
    fn test_base_url_with_port() {
        let url = BaseUrl::new("http://127.0.0.1:4321").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_base_url_rejects_invalid_values() {
        for bad in ["", "proxy.example.com", "ftp://proxy.example.com", "https://", "https://:80"] {
            assert!(
                matches!(BaseUrl::new(bad), Err(ConfigError::InvalidBaseUrl { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
