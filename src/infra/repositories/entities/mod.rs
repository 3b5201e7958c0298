//! SeaORM entity definitions

pub mod credential;

pub use credential::{
    ActiveModel as CredentialActiveModel, Entity as CredentialEntity, Model as CredentialModel,
};
