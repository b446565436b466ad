//! Request extractors

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;

/// `axum::Json` with this service's error envelope on rejection.
///
/// The stock `Json` rejection answers plain text with axum's status choices;
/// this wrapper routes every body failure through [`ApiError`] so callers
/// always see the same JSON shape.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(ApiError::from_json_rejection(rejection)),
        }
    }
}
