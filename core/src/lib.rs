//! Typed client for the to-do HTTP API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network. The caller executes the round-trip with whatever
//! HTTP stack it already has, so this crate stays deterministic and easy to
//! test.
//!
//! # Design
//! - `TodoClient` holds only `base_url`.
//! - Every operation is a `build_*` / `parse_*` pair.
//! - Error bodies of the form `{"detail": ...}` are surfaced in
//!   [`ApiError::NotFound`].

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Greeting, Todo, TodoCreate};
