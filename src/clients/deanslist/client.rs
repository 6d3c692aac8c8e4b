//! The [`DeansList`] client.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::{HttpClient, HttpRequest};
use crate::config::{ApiKey, DeansListConfig, Subdomain};
use crate::error::DeansListError;
use crate::rest::{lookup, Payload, QueryParams};

/// Client for one school's DeansList API.
///
/// Construction performs a single `users` request to resolve the school's id
/// and name, so a client that exists has already proven that the subdomain
/// and API key work.
///
/// # Thread Safety
///
/// `DeansList` is `Send + Sync`. All state is immutable after construction
/// and the underlying connection pool is shared safely across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use deanslist::{DeansList, QueryParams};
///
/// let client = DeansList::new("acme", "api-key", None).await?;
/// println!("Connected to {} ({})", client.school_name(), client.school_id());
///
/// let params = QueryParams::new()
///     .insert("sdt", "2024-01-01")
///     .insert("edt", "2024-01-31");
/// let behavior = client.get_behavior(&params).await?;
///
/// // Or by name
/// let same = client.fetch("behavior", &[], &params).await?;
/// ```
#[derive(Debug)]
pub struct DeansList {
    http_client: HttpClient,
    school_id: String,
    school_name: String,
}

// Verify DeansList is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DeansList>();
};

/// The fields of a `users` row that identify the school.
#[derive(Debug, Deserialize)]
struct SchoolUser {
    #[serde(rename = "SchoolName")]
    school_name: String,
    #[serde(rename = "DLSchoolID")]
    school_id: Value,
}

impl DeansList {
    /// Connects to a school by subdomain and API key.
    ///
    /// # Errors
    ///
    /// Returns [`DeansListError::Config`] if the subdomain or key is invalid,
    /// and any error [`fetch`](Self::fetch) can return for the bootstrap
    /// `users` request.
    pub async fn new(
        subdomain: &str,
        api_key: &str,
        user_agent: Option<&str>,
    ) -> Result<Self, DeansListError> {
        let mut builder = DeansListConfig::builder()
            .api_key(ApiKey::new(api_key)?)
            .subdomain(Subdomain::new(subdomain)?);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        Self::with_config(&builder.build()?).await
    }

    /// Connects using a prepared configuration.
    ///
    /// # Errors
    ///
    /// Returns any error [`fetch`](Self::fetch) can return for the bootstrap
    /// `users` request, or [`DeansListError::MalformedResponse`] if the
    /// response carries no school information.
    pub async fn with_config(config: &DeansListConfig) -> Result<Self, DeansListError> {
        let http_client = HttpClient::new(config)?;
        let (school_id, school_name) = Self::resolve_school(&http_client).await?;

        tracing::debug!("DeansList client initialized for {}!", school_name);

        Ok(Self {
            http_client,
            school_id,
            school_name,
        })
    }

    /// Returns the DeansList id of the school (`DLSchoolID`).
    #[must_use]
    pub fn school_id(&self) -> &str {
        &self.school_id
    }

    /// Returns the school's name.
    #[must_use]
    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Fetches a resource by registry name.
    ///
    /// `ids` must hold exactly one identifier for a resource endpoint and none
    /// for a collection endpoint. Returns `Ok(None)` if the server answered
    /// 2xx with a body that is not JSON.
    ///
    /// # Errors
    ///
    /// - [`DeansListError::UnknownEndpoint`] if `name` is not registered
    /// - [`DeansListError::InvalidArguments`] if `ids` has the wrong length
    /// - [`DeansListError::InvalidIdentifier`] if an id is not a plain path segment
    /// - [`DeansListError::InvalidParameter`] if a key in `params` is not accepted
    /// - [`DeansListError::Http`] for transport failures and non-2xx statuses
    /// - [`DeansListError::MalformedResponse`] if an envelope's counts do not match
    pub async fn fetch(
        &self,
        name: &str,
        ids: &[&str],
        params: &QueryParams,
    ) -> Result<Option<Payload>, DeansListError> {
        execute(&self.http_client, name, ids, params).await
    }

    async fn resolve_school(http_client: &HttpClient) -> Result<(String, String), DeansListError> {
        let payload = execute(http_client, "users", &[], &QueryParams::new())
            .await?
            .ok_or_else(|| DeansListError::MalformedResponse {
                reason: "users endpoint returned a non-JSON body".to_string(),
            })?;

        let (data, _) = payload.into_parts();
        let first = data
            .get(0)
            .cloned()
            .ok_or_else(|| DeansListError::MalformedResponse {
                reason: "users endpoint returned no rows".to_string(),
            })?;

        let user: SchoolUser =
            serde_json::from_value(first).map_err(|e| DeansListError::MalformedResponse {
                reason: format!("users row lacks school information: {e}"),
            })?;

        let school_id = match user.school_id {
            Value::String(id) => id,
            Value::Number(id) => id.to_string(),
            other => {
                return Err(DeansListError::MalformedResponse {
                    reason: format!("DLSchoolID is neither a string nor a number: {other}"),
                })
            }
        };

        Ok((school_id, user.school_name))
    }
}

async fn execute(
    http_client: &HttpClient,
    name: &str,
    ids: &[&str],
    params: &QueryParams,
) -> Result<Option<Payload>, DeansListError> {
    let spec = lookup(name)?;
    let path = spec.resolve_path(ids)?;
    spec.validate_params(params.keys())?;

    let request = HttpRequest::builder(path).query(params.iter()).build();
    let response = http_client.request(request).await?;

    response.body.map(Payload::from_body).transpose()
}
