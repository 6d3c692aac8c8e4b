//! Endpoint resolution and response normalization for the DeansList API.
//!
//! This module holds the decision logic of the client:
//!
//! - **[`ENDPOINTS`]**: the static registry mapping resource names to
//!   an [`ApiFamily`], path fragment, [`Cardinality`] and accepted parameters
//! - **[`QueryParams`]**: ordered query parameters with date and flag helpers
//! - **[`Payload`]**: the normalized form of a response body
//!
//! # Example
//!
//! ```rust
//! use deanslist::rest::{lookup, Payload, QueryParams};
//! use serde_json::json;
//!
//! let spec = lookup("behavior").unwrap();
//! let params = QueryParams::new().insert("sdt", "2024-01-01");
//! spec.validate_params(params.keys()).unwrap();
//!
//! let payload = Payload::from_body(json!({"rowcount": 1, "data": [{"DLSAID": "1"}]})).unwrap();
//! assert_eq!(payload.rows().unwrap().len(), 1);
//! ```

mod endpoints;
mod params;
mod response;

pub use endpoints::{
    accessor_names, lookup, names, ApiFamily, Cardinality, EndpointSpec, ENDPOINTS,
};
pub use params::QueryParams;
pub use response::Payload;
