//! HTTP response types for the DeansList API client.

/// A successful response from the DeansList API.
///
/// `body` is `None` when the server answered 2xx with something that is not
/// JSON. The caller gets `Ok(None)` in that case rather than an error.
///
/// # Example
///
/// ```rust
/// use deanslist::clients::HttpResponse;
///
/// let response = HttpResponse::from_text(200, r#"{"rowcount": 0, "data": []}"#);
/// assert_eq!(response.code, 200);
/// assert!(response.body.is_some());
///
/// let response = HttpResponse::from_text(200, "<html>maintenance</html>");
/// assert!(response.body.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The decoded JSON body, or `None` if the body was not valid JSON.
    pub body: Option<serde_json::Value>,
}

impl HttpResponse {
    /// Creates a response from a status code and raw body text.
    #[must_use]
    pub fn from_text(code: u16, text: &str) -> Self {
        let body = match serde_json::from_str(text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Response was not valid JSON: {}", e);
                None
            }
        };
        Self { code, body }
    }
}
