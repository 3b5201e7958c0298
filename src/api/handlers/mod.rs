//! HTTP request handlers.

pub mod index_handler;

pub use index_handler::index_routes;
