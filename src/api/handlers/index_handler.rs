//! Welcome endpoint.

use axum::{response::Json, routing::get, Router};

use crate::config::WELCOME_MESSAGE;
use crate::types::ApiResponse;

/// Create index routes
pub fn index_routes() -> Router {
    Router::new().route("/", get(index))
}

/// `GET /` - always 200 with the welcome message
pub async fn index() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(WELCOME_MESSAGE))
}
