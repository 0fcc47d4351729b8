//! JSON request extraction
//!
//! Provides an `ApiJson` extractor that enforces the API's body contract:
//! a missing or wrong `Content-Type` is a 400 with a fixed message, and
//! any other body rejection surfaces as a 400 in the standard error shape.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON extractor that maps rejections into the API error shape
///
/// Use this instead of `Json<T>` so that content-type and parse failures
/// produce `{"error": "<message>"}` bodies like every other failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::BadRequest("Content-Type must be application/json".to_string())
                },
                other => ApiError::BadRequest(other.body_text()),
            }),
        }
    }
}
