//! In-memory to-do HTTP API.
//!
//! # Overview
//! A seeded [`TodoStore`] behind an axum router exposing create, fetch,
//! update, delete and list endpoints plus a greeting at `/` and the OpenAPI
//! document at `/openapi.json`. State lives only as long as the process.
//!
//! # Design
//! - The store is an explicit handle passed to the router as state, so each
//!   test can run against its own instance.
//! - Request bodies are validated during deserialization; handlers only see
//!   payloads that already satisfy the length limits.
//! - All errors render as `{"detail": ...}` (see [`error::ApiError`]).

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod schema;
pub mod store;
pub mod validation;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use crate::config::Config;
pub use schema::{Greeting, Todo, TodoCreate};
pub use store::{StoreError, TodoStore};

/// The full application over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(TodoStore::seeded())
}

pub fn app_with_store(store: TodoStore) -> Router {
    routes::router(store).layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
