//! Application route configuration.

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::handlers::index_routes;
use super::middleware::handle_panic;

/// Create the application router.
///
/// Only `GET /` is served; other paths fall through to axum's default 404.
pub fn create_router() -> Router {
    create_router_with(Router::new())
}

/// Create the application router with extra routes (e.g. a mounted
/// controller) merged in before the layers are applied.
///
/// The panic catcher is the outermost layer.
pub fn create_router_with(routes: Router) -> Router {
    Router::new()
        .merge(index_routes())
        .merge(routes)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}
