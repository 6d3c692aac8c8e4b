//! HTTP client types for DeansList API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DeansList`]: The high-level client with one accessor per endpoint
//! - [`HttpClient`]: The async HTTP client carrying the credential and headers
//! - [`HttpRequest`]: A GET request to be sent to the API
//! - [`HttpResponse`]: A response whose body has been decoded as JSON, if possible
//! - [`HttpError`]: Transport and HTTP status failures
//!
//! # Retry Behavior
//!
//! None. Each request is attempted once and is bounded by the configured
//! timeout (30 seconds by default).

pub mod deanslist;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use deanslist::DeansList;
pub use errors::HttpError;
pub use http_client::{HttpClient, API_KEY_PARAM, SDK_VERSION};
pub use http_request::{HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
