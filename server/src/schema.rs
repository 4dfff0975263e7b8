//! JSON shapes exchanged over the HTTP API.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::validation::{TodoDescription, TodoTitle};

/// Text returned by `GET /`.
pub const GREETING: &str = "Welcome to the To-Do List API!";

/// A single to-do record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    /// Identifier assigned by the store.
    pub id: u64,
    /// Short summary of the task.
    pub title: String,
    /// Optional longer text; `null` when absent.
    pub description: Option<String>,
    /// Whether the task is done. Always `false` for new records.
    pub completed: bool,
}

/// Request body for both `POST /todos` and `PUT /todos/{todo_id}`.
///
/// The id is never accepted from the caller.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TodoCreate {
    /// To-do title.
    #[schema(value_type = String, min_length = 1, max_length = 100)]
    pub title: TodoTitle,
    /// To-do description.
    #[serde(default)]
    #[schema(value_type = Option<String>, max_length = 100)]
    pub description: Option<TodoDescription>,
}

impl TodoCreate {
    /// Splits the payload into the plain strings the store works with.
    pub fn into_parts(self) -> (String, Option<String>) {
        (
            self.title.into_inner(),
            self.description.map(TodoDescription::into_inner),
        )
    }
}

/// Query string of `GET /todos`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TodoIdQuery {
    /// Identifier of the to-do to fetch.
    pub todo_id: i64,
}

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    pub message: String,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub detail: String,
}
