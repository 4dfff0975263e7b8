//! Error responses for route handlers.
//!
//! Every failure is rendered as `{"detail": <message>}`, including unmatched
//! routes and methods. Extractor rejections (bad JSON, out-of-range title,
//! non-integer id, missing query) all become 422.

use axum::{
    extract::rejection::{BytesRejection, JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::schema::ErrorDetail;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An id that can never be assigned, such as a negative one.
    #[error("Todo not found: {0}")]
    UnknownId(i64),

    #[error("Not Found")]
    RouteNotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The request did not pass schema validation.
    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_))
            | ApiError::UnknownId(_)
            | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDetail {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
