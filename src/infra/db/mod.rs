//! Database connection and schema management.

use std::sync::Arc;

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationName, MigratorTrait};

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::repositories::DefaultRepository;

pub mod migrations;

pub use migrations::Migrator;

/// Database wrapper for connection management.
///
/// Cloning shares the same pool.
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open a connection pool using `DATABASE_URL`.
    ///
    /// Migrations are not applied here; use the `migrate` command.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let connection = SeaDatabase::connect(config.database_url()?).await?;
        tracing::info!("Database connected");
        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Build a repository for entity `E` on this connection pool.
    pub fn repository<E, A>(&self) -> DefaultRepository<E, A> {
        DefaultRepository::new(Arc::clone(&self.connection))
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(self.connection.as_ref(), None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(self.connection.as_ref(), Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(self.connection.as_ref())
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect())
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(self.connection.as_ref()).await
    }
}
