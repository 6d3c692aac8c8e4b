//! High-level client for the DeansList API.
//!
//! [`DeansList`] ties the endpoint registry to the [`HttpClient`](crate::clients::HttpClient):
//! it validates identifiers and parameters against the registry, sends the
//! request and normalizes the body into a [`Payload`](crate::rest::Payload).
//!
//! Every registry entry also has an explicit `get_<name>` accessor; see
//! [`accessor_names`](crate::rest::accessor_names) for the full list.

mod accessors;
mod client;

pub use client::DeansList;
