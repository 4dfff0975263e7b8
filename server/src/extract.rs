//! Request extractors that report failures as [`ApiError`].

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON request body. A request without a `Content-Type` header is still
/// parsed as JSON; any other content type must be `application/json`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }
        let bytes = Bytes::from_request(req, state).await?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// The `{todo_id}` path segment. Any integer is accepted; ids that can never
/// exist in the store resolve to a 404 instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub u64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<i64>::from_request_parts(parts, state).await?;
        TodoId::try_from(raw)
    }
}

impl TryFrom<i64> for TodoId {
    type Error = ApiError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        u64::try_from(raw)
            .map(TodoId)
            .map_err(|_| ApiError::UnknownId(raw))
    }
}
