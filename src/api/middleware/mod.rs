//! API middleware.

pub mod error;

pub use error::handle_panic;
