//! API layer - HTTP handlers and middleware
//!
//! - Request handlers and the generic controller
//! - Error boundary and panic catcher
//! - Custom extractors
//! - Route definitions

pub mod controller;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use controller::DefaultController;
pub use routes::{create_router, create_router_with};
