//! Repository layer - Data access abstraction

mod default_repository;
pub mod entities;

pub use default_repository::{DefaultRepository, PrimaryKeyOf, Repository};

/// Repository for the `credentials` table.
pub type CredentialRepository =
    DefaultRepository<entities::CredentialEntity, entities::CredentialActiveModel>;
