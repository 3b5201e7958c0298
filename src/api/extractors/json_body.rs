//! JSON body extractor that reports rejections through the error envelope.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Like `axum::Json`, but a malformed body becomes an [`AppError`] carrying
/// the rejection's status (400, 415 or 422) and text.
///
/// # Example
///
/// ```rust,ignore
/// use senha_api::api::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<serde_json::Value>) {
///     // payload is already parsed
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::with_status(rejection.status(), rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
