//! Error boundary: turns every handler failure into the JSON error envelope.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::types::ErrorResponse;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// Panic handler for `CatchPanicLayer`.
///
/// The panic payload is logged, never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {}", detail);

    AppError::internal("Internal server error").into_response()
}
