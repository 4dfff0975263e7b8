//! HTTP handlers and the OpenAPI document describing them.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::extract::{JsonBody, TodoId};
use crate::schema::{ErrorDetail, Greeting, Todo, TodoCreate, TodoIdQuery, GREETING};
use crate::store::TodoStore;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Single-File To-Do API",
        description = "A simple To-do API",
        version = "0.1.0"
    ),
    paths(
        read_root,
        create_todo,
        get_todo,
        update_todo,
        delete_todo,
        list_todos
    ),
    components(schemas(Todo, TodoCreate, Greeting, ErrorDetail)),
    tags(
        (name = "todos", description = "To-do CRUD"),
        (name = "root", description = "Service greeting")
    )
)]
pub struct ApiDoc;

/// Builds the router over the given store.
pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/openapi.json", get(openapi))
        .route("/todos", get(get_todo).post(create_todo))
        .route("/todos/list", get(list_todos))
        .route("/todos/{todo_id}", put(update_todo).delete(delete_todo))
        .method_not_allowed_fallback(|| async { ApiError::MethodNotAllowed })
        .fallback(|| async { ApiError::RouteNotFound })
        .with_state(store)
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service greeting", body = Greeting)),
    tag = "root"
)]
#[tracing::instrument]
async fn read_root() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING.to_string(),
    })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    post,
    path = "/todos",
    request_body = TodoCreate,
    responses(
        (status = 201, description = "Created", body = Todo),
        (status = 422, description = "Validation failed", body = ErrorDetail)
    ),
    tag = "todos"
)]
#[tracing::instrument(skip_all)]
async fn create_todo(
    State(store): State<TodoStore>,
    JsonBody(input): JsonBody<TodoCreate>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let (title, description) = input.into_parts();
    let todo = store.create(title, description).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

#[utoipa::path(
    get,
    path = "/todos",
    params(TodoIdQuery),
    responses(
        (status = 200, description = "The requested to-do", body = Todo),
        (status = 404, description = "No to-do with that id", body = ErrorDetail),
        (status = 422, description = "Missing or invalid id", body = ErrorDetail)
    ),
    tag = "todos"
)]
#[tracing::instrument(skip_all)]
async fn get_todo(
    State(store): State<TodoStore>,
    query: Result<Query<TodoIdQuery>, QueryRejection>,
) -> Result<Json<Todo>, ApiError> {
    let Query(TodoIdQuery { todo_id }) = query?;
    let TodoId(todo_id) = TodoId::try_from(todo_id)?;
    Ok(Json(store.get(todo_id).await?))
}

#[utoipa::path(
    put,
    path = "/todos/{todo_id}",
    params(("todo_id" = i64, Path, description = "Identifier of the to-do to update")),
    request_body = TodoCreate,
    responses(
        (status = 200, description = "Updated", body = Todo),
        (status = 404, description = "No to-do with that id", body = ErrorDetail),
        (status = 422, description = "Validation failed", body = ErrorDetail)
    ),
    tag = "todos"
)]
#[tracing::instrument(skip_all)]
async fn update_todo(
    State(store): State<TodoStore>,
    TodoId(todo_id): TodoId,
    JsonBody(input): JsonBody<TodoCreate>,
) -> Result<Json<Todo>, ApiError> {
    let (title, description) = input.into_parts();
    Ok(Json(store.update(todo_id, title, description).await?))
}

#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    params(("todo_id" = i64, Path, description = "Identifier of the to-do to delete")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No to-do with that id", body = ErrorDetail)
    ),
    tag = "todos"
)]
#[tracing::instrument(skip_all)]
async fn delete_todo(
    State(store): State<TodoStore>,
    TodoId(todo_id): TodoId,
) -> Result<StatusCode, ApiError> {
    store.delete(todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/todos/list",
    responses((status = 200, description = "Every to-do keyed by id", body = BTreeMap<String, Todo>)),
    tag = "todos"
)]
#[tracing::instrument(skip_all)]
async fn list_todos(State(store): State<TodoStore>) -> Json<BTreeMap<u64, Todo>> {
    Json(store.list_all().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(doc["info"]["title"], "Single-File To-Do API");
        assert_eq!(doc["info"]["version"], "0.1.0");
        let paths = doc["paths"].as_object().unwrap();
        for path in ["/", "/todos", "/todos/list", "/todos/{todo_id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(paths["/todos"].get("post").is_some());
        assert!(paths["/todos"].get("get").is_some());
        assert!(paths["/todos/{todo_id}"].get("put").is_some());
        assert!(paths["/todos/{todo_id}"].get("delete").is_some());
    }
}
