//! MongoDB implementation of the document store.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use serde::{de::DeserializeOwned, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::instrument;

use crate::error::{StoreError, StoreResult};
use crate::models::{DeleteOutcome, InsertOutcome, User};
use crate::repository::DocumentStore;
use crate::USER_COLLECTION;

/// MongoDB-backed [`DocumentStore`] over one typed collection.
///
/// Every operation runs under `op_timeout`; the driver itself has no
/// per-operation deadline, so a stalled store surfaces as
/// [`StoreError::Timeout`] instead of a hung request.
pub struct MongoDocumentStore<T> {
    collection: Collection<T>,
    op_timeout: Duration,
}

impl<T> MongoDocumentStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static,
{
    pub fn new(db: &Database, name: &str, op_timeout: Duration) -> Self {
        Self {
            collection: db.collection::<T>(name),
            op_timeout,
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    async fn timed<F, R>(&self, fut: F) -> StoreResult<R>
    where
        F: Future<Output = Result<R, mongodb::error::Error>>,
    {
        tokio::time::timeout(self.op_timeout, fut)
            .await
            .map_err(|_| StoreError::Timeout(self.op_timeout))?
            .map_err(StoreError::from)
    }
}

fn insert_outcome(inserted_id: mongodb::bson::Bson) -> InsertOutcome {
    let inserted_id = inserted_id
        .as_object_id()
        .map_or_else(|| inserted_id.to_string(), |id| id.to_hex());
    InsertOutcome { inserted_id }
}

#[async_trait]
impl<T> DocumentStore<T> for MongoDocumentStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static,
{
    #[instrument(skip(self))]
    async fn list(&self) -> StoreResult<Vec<T>> {
        self.timed(async {
            let cursor = self.collection.find(doc! {}).await?;
            cursor.try_collect().await
        })
        .await
    }

    #[instrument(skip(self))]
    async fn page(&self, skip: u64, limit: i64) -> StoreResult<Vec<T>> {
        let options = FindOptions::builder().skip(skip).limit(limit).build();

        self.timed(async {
            let cursor = self.collection.find(doc! {}).with_options(options).await?;
            cursor.try_collect().await
        })
        .await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<T>> {
        self.timed(async { self.collection.find_one(doc! { "_id": id }).await })
            .await
    }

    #[instrument(skip(self))]
    async fn find_by_field(&self, field: &str, value: &str) -> StoreResult<Vec<T>> {
        let mut filter = Document::new();
        filter.insert(field, value);

        self.timed(async {
            let cursor = self.collection.find(filter).await?;
            cursor.try_collect().await
        })
        .await
    }

    #[instrument(skip(self, doc))]
    async fn insert(&self, doc: T) -> StoreResult<InsertOutcome> {
        let result = self
            .timed(async { self.collection.insert_one(&doc).await })
            .await?;

        let outcome = insert_outcome(result.inserted_id);
        tracing::info!(inserted_id = %outcome.inserted_id, "Document inserted");
        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<DeleteOutcome> {
        let result = self
            .timed(async { self.collection.delete_one(doc! { "_id": id }).await })
            .await?;

        tracing::info!(deleted_count = result.deleted_count, "Delete completed");
        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}

/// Create the unique email index backing duplicate-free user registration.
///
/// Uniqueness lives in the store, not in process: two concurrent
/// registrations for the same address race at the index, and exactly one
/// insert wins.
pub async fn ensure_user_indexes(db: &Database) -> StoreResult<()> {
    let indexes = vec![IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(
            IndexOptions::builder()
                .unique(true)
                .name("idx_email_unique".to_string())
                .build(),
        )
        .build()];

    db.collection::<User>(USER_COLLECTION)
        .create_indexes(indexes)
        .await?;

    tracing::info!("User indexes created successfully");
    Ok(())
}
