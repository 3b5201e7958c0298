//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Generic repositories over SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{CredentialRepository, DefaultRepository, Repository};
