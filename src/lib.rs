//! senha-api - HTTP skeleton for a password generation API
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **services**: The single-operation service contract run by controllers
//! - **infra**: Database connection, migrations and generic repositories
//! - **api**: HTTP handlers, controller, error boundary and routes
//! - **types**: Shared response envelopes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! PORT=3000 cargo run -- serve
//!
//! # Run migrations
//! DATABASE_URL=postgres://... cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, create_router_with, DefaultController};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::{Database, DefaultRepository, Repository};
pub use services::Service;
