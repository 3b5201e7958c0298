//! Generic controller: runs an injected [`Service`] and wraps its result.

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};

use crate::errors::AppResult;
use crate::services::Service;
use crate::types::ApiResponse;

/// Controller around a single service operation.
///
/// A successful run answers `200 {"success":true,"data":..}`; a failed run
/// is returned to the error boundary so the client always gets a response.
pub struct DefaultController<S> {
    service: Arc<S>,
}

impl<S> DefaultController<S>
where
    S: Service + 'static,
{
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Run the service once.
    pub async fn handle(&self) -> AppResult<Json<ApiResponse<S::Output>>> {
        let data = self.service.run().await?;
        Ok(Json(ApiResponse::success(data)))
    }

    /// Mount the controller as `GET /` of a router.
    pub fn routes(self) -> Router {
        Router::new()
            .route("/", get(dispatch::<S>))
            .with_state(Arc::new(self))
    }
}

async fn dispatch<S>(
    State(controller): State<Arc<DefaultController<S>>>,
) -> AppResult<Json<ApiResponse<S::Output>>>
where
    S: Service + 'static,
{
    controller.handle().await
}
