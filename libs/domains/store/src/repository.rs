use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StoreResult;
use crate::models::{DeleteOutcome, InsertOutcome};

/// Data access contract shared by every collection in the store.
///
/// One generic trait instead of a trait per entity: the storefront's
/// collections all expose the same six operations, so the backend seam is
/// parameterized by document type and instantiated per collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore<T: Send + Sync + 'static>: Send + Sync {
    /// Every document in the collection, in store-native order.
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// A slice of the collection starting at `skip`, at most `limit` documents.
    async fn page(&self, skip: u64, limit: i64) -> StoreResult<Vec<T>>;

    /// A single document by its store identifier.
    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<T>>;

    /// Exact-match filter on a single field.
    async fn find_by_field(&self, field: &str, value: &str) -> StoreResult<Vec<T>>;

    /// Insert the document verbatim, returning the generated identifier.
    async fn insert(&self, doc: T) -> StoreResult<InsertOutcome>;

    /// Delete at most one document by its store identifier.
    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<DeleteOutcome>;
}
