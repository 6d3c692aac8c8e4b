//! # DeansList API Rust Client
//!
//! An async client for the DeansList school behavior management API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`DeansListConfig`] and [`DeansListConfigBuilder`]
//! - Validated newtypes for the API key, school subdomain and base URL override
//! - A static endpoint registry mapping resource names to versioned paths
//!   ([`rest::ENDPOINTS`])
//! - Parameter validation against each endpoint's accepted query keys
//! - Normalization of `{rowcount, data}` envelopes into a [`Payload`], with
//!   row-count checks
//! - A [`DeansList`] client with one `get_<name>` accessor per endpoint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deanslist::{DeansList, QueryParams};
//!
//! // Connecting resolves the school's id and name from the users endpoint
//! let client = DeansList::new("my-school", "your-api-key", None).await?;
//! println!("Connected to {}", client.school_name());
//!
//! // Fetch a collection with filters
//! let params = QueryParams::new()
//!     .insert("sdt", "2024-01-01")
//!     .insert("edt", "2024-01-31");
//! let behavior = client.get_behavior(&params).await?;
//!
//! // Fetch a single record by id
//! let roster = client.get_roster(1234).await?;
//! ```
//!
//! ## Deleted Records
//!
//! Endpoints that support `IncludeDeleted` return active and deleted rows
//! together:
//!
//! ```rust,ignore
//! use deanslist::{Payload, QueryParams};
//!
//! let params = QueryParams::new().flag("IncludeDeleted", true);
//! if let Some(Payload::RowsWithDeleted { data, deleted }) = client.get_behavior(&params).await? {
//!     println!("{} active, {} deleted", data.len(), deleted.len());
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use deanslist::{ApiKey, DeansListConfig, Subdomain};
//!
//! let config = DeansListConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .subdomain(Subdomain::new("my-school").unwrap())
//!     .user_agent("DistrictSync/1.0")
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction, and bad
//!   identifiers or parameters are rejected before any request is sent
//! - **One shot**: No retries, caching or pagination; each call is one GET
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, DeansListConfig, DeansListConfigBuilder, Subdomain};
pub use error::{ConfigError, DeansListError};

pub use clients::{DeansList, HttpClient, HttpError, HttpRequest, HttpResponse};
pub use rest::{ApiFamily, Cardinality, EndpointSpec, Payload, QueryParams};
