//! Request builder and response parser for the to-do API.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Greeting, Todo, TodoCreate};

/// Stateless client for the to-do API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_greeting(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, "/")
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, "/todos/list")
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.bodyless(HttpMethod::Get, &format!("/todos?todo_id={id}"))
    }

    pub fn build_create_todo(&self, input: &TodoCreate) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "/todos", input)
    }

    pub fn build_update_todo(&self, id: u64, input: &TodoCreate) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, &format!("/todos/{id}"), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, &format!("/todos/{id}"))
    }

    pub fn parse_greeting(&self, response: HttpResponse) -> Result<Greeting, ApiError> {
        parse_json(response, 200)
    }

    /// Records keyed by id, in ascending id order.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<BTreeMap<u64, Todo>, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn bodyless(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        path: &str,
        input: &TodoCreate,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Map an unexpected status code to the matching `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .map(|err| err.detail)
            .unwrap_or_else(|_| response.body.clone());
        return Err(ApiError::NotFound(detail));
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
