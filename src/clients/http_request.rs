//! HTTP request types for the DeansList API client.
//!
//! The API is read-only, so every request is a GET: a path relative to the
//! base URL plus an ordered list of query parameters.

/// A GET request to be sent to the DeansList API.
///
/// Use [`HttpRequest::builder`] to construct requests.
///
/// # Example
///
/// ```rust
/// use deanslist::clients::HttpRequest;
///
/// let request = HttpRequest::builder("api/beta/export/get-behavior-data.php")
///     .query_param("sdt", "2024-01-01")
///     .query_param("edt", "2024-01-31")
///     .build();
///
/// assert_eq!(request.query.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters in the order they were added.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for the given path.
    #[must_use]
    pub fn builder(path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(path)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends all query parameters from an iterator.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            path: self.path,
            query: self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_request_without_query() {
        let request = HttpRequest::builder("api/v1/terms").build();

        assert_eq!(request.path, "api/v1/terms");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_builder_preserves_query_order() {
        let request = HttpRequest::builder("api/v1/referrals")
            .query_param("sdt", "2024-01-01")
            .query([("edt", "2024-01-31"), ("sid", "42")])
            .build();

        assert_eq!(
            request.query,
            vec![
                ("sdt".to_string(), "2024-01-01".to_string()),
                ("edt".to_string(), "2024-01-31".to_string()),
                ("sid".to_string(), "42".to_string()),
            ]
        );
    }
}
