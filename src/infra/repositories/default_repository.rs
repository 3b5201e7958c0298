//! Generic repository over a SeaORM entity.
//!
//! Every operation forwards to the ORM with no added semantics, so a
//! repository for a new table is just a type alias over its entity and
//! active model.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IntoActiveModel, Iterable, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryFilter, Select, TransactionError, TransactionTrait, Value,
};

use crate::errors::{AppError, AppResult};
use crate::types::PaginationParams;

/// Primary key value type of entity `E`.
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Data-access interface parametrized over an entity `E` and its active model `A`.
#[async_trait]
pub trait Repository<E, A>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Fetch every record
    async fn get_all(&self) -> AppResult<Vec<E::Model>> {
        E::find().all(self.db()).await.map_err(Into::into)
    }

    /// Fetch the records matching `condition`
    async fn get_where(&self, condition: Condition) -> AppResult<Vec<E::Model>> {
        E::find()
            .filter(condition)
            .all(self.db())
            .await
            .map_err(Into::into)
    }

    /// Fetch records with extra query options (ordering, limits, filters)
    async fn get_all_with<Q>(&self, query: Q) -> AppResult<Vec<E::Model>>
    where
        Q: FnOnce(Select<E>) -> Select<E> + Send,
    {
        query(E::find()).all(self.db()).await.map_err(Into::into)
    }

    /// Fetch one page of records and the total row count
    async fn get_page(&self, params: &PaginationParams) -> AppResult<(Vec<E::Model>, u64)> {
        let paginator = E::find().paginate(self.db(), params.limit());
        let total = paginator.num_items().await?;
        let data = paginator.fetch_page(params.page.saturating_sub(1)).await?;
        Ok((data, total))
    }

    /// Look up a single record by primary key
    async fn get_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<Option<E::Model>> {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// Look up a record by primary key with extra query options
    async fn get_by_id_with<Q>(
        &self,
        id: PrimaryKeyOf<E>,
        query: Q,
    ) -> AppResult<Option<E::Model>>
    where
        Q: FnOnce(Select<E>) -> Select<E> + Send,
    {
        query(E::find_by_id(id)).one(self.db()).await.map_err(Into::into)
    }

    /// Insert a record and return it as stored
    async fn create(&self, data: A) -> AppResult<E::Model>
    where
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        data.insert(self.db()).await.map_err(Into::into)
    }

    /// Apply the set fields of `data` to the record identified by `id`.
    ///
    /// Fails with `NotFound` when no such record exists.
    async fn update(&self, id: PrimaryKeyOf<E>, mut data: A) -> AppResult<E::Model>
    where
        PrimaryKeyOf<E>: Into<Value>,
        <<A as ActiveModelTrait>::Entity as EntityTrait>::Model: Send,
    {
        if let Some(key) = E::PrimaryKey::iter().next() {
            data.set(key.into_column(), id.into());
        }
        data.update(self.db()).await.map_err(Into::into)
    }

    /// Delete the record identified by `id`.
    ///
    /// Fails with `NotFound` when no such record exists.
    async fn delete(&self, id: PrimaryKeyOf<E>) -> AppResult<()> {
        let result = E::delete_by_id(id).exec(self.db()).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    /// Run `callback` inside a database transaction.
    ///
    /// Committed when the callback returns `Ok`, rolled back otherwise.
    async fn transaction<F, T>(&self, callback: F) -> AppResult<T>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'c>>
            + Send,
        T: Send,
    {
        self.db()
            .transaction::<F, T, AppError>(callback)
            .await
            .map_err(|err| match err {
                TransactionError::Connection(e) => AppError::from(e),
                TransactionError::Transaction(e) => {
                    tracing::debug!("Transaction rolled back: {}", e);
                    e
                }
            })
    }
}

/// Concrete repository holding a shared connection pool.
pub struct DefaultRepository<E, A> {
    db: Arc<DatabaseConnection>,
    _marker: PhantomData<fn() -> (E, A)>,
}

impl<E, A> DefaultRepository<E, A> {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }
}

impl<E, A> Repository<E, A> for DefaultRepository<E, A>
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
