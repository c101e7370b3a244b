//! Collection access service - the one generic read/write surface shared by
//! every collection in the store.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::instrument;
use utoipa::IntoParams;

use crate::error::{StoreError, StoreResult};
use crate::models::{DeleteOutcome, InsertOutcome};
use crate::repository::DocumentStore;

/// Per-collection tuning for the generic access service.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// Collection name, used for tracing.
    pub name: &'static str,
    /// Page size applied when a pagination request does not carry one.
    pub default_page_size: i64,
}

/// Untrusted pagination parameters, straight from the query string.
///
/// Kept as raw strings so that non-numeric values fall back to the
/// per-collection defaults instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageRequest {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Generic access service, instantiated once per collection.
///
/// Parses and guards untrusted input (ids, pagination) before anything
/// reaches the store; the store itself only ever sees well-formed requests.
pub struct CollectionService<T, S>
where
    T: Send + Sync + 'static,
    S: DocumentStore<T>,
{
    store: Arc<S>,
    config: CollectionConfig,
    _doc: PhantomData<fn() -> T>,
}

impl<T, S> CollectionService<T, S>
where
    T: Send + Sync + 'static,
    S: DocumentStore<T>,
{
    pub fn new(store: S, config: CollectionConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
            _doc: PhantomData,
        }
    }

    /// Every document in the collection, in store-native order.
    #[instrument(skip(self), fields(collection = self.config.name))]
    pub async fn list_all(&self) -> StoreResult<Vec<T>> {
        self.store.list().await
    }

    /// Documents at offset `page * limit`, at most `limit` of them.
    ///
    /// Missing or non-numeric parameters fall back to page 0 and the
    /// configured page size; a zero or negative limit, a negative page, or
    /// an overflowing offset is rejected as a validation error.
    #[instrument(skip(self), fields(collection = self.config.name))]
    pub async fn paginate(&self, request: PageRequest) -> StoreResult<Vec<T>> {
        let (skip, limit) = self.resolve_page(&request)?;
        self.store.page(skip, limit).await
    }

    /// A single document, or `None` when the id matches nothing.
    #[instrument(skip(self), fields(collection = self.config.name))]
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let id = parse_id(id)?;
        self.store.find_by_id(id).await
    }

    /// Exact-match lookup on one field.
    ///
    /// An absent or empty value is authoritative: the result is empty and
    /// the store is never contacted.
    #[instrument(skip(self), fields(collection = self.config.name))]
    pub async fn find_by_field(&self, field: &str, value: Option<&str>) -> StoreResult<Vec<T>> {
        match value {
            Some(value) if !value.is_empty() => self.store.find_by_field(field, value).await,
            _ => Ok(Vec::new()),
        }
    }

    /// Insert the document verbatim.
    #[instrument(skip(self, doc), fields(collection = self.config.name))]
    pub async fn insert(&self, doc: T) -> StoreResult<InsertOutcome> {
        self.store.insert(doc).await
    }

    /// Delete at most one document by id.
    #[instrument(skip(self), fields(collection = self.config.name))]
    pub async fn delete_by_id(&self, id: &str) -> StoreResult<DeleteOutcome> {
        let id = parse_id(id)?;
        self.store.delete_by_id(id).await
    }

    fn resolve_page(&self, request: &PageRequest) -> StoreResult<(u64, i64)> {
        let page = match parse_param(request.page.as_deref()) {
            None => 0,
            Some(page) if page < 0 => {
                return Err(StoreError::Validation(format!(
                    "page must be non-negative, got {}",
                    page
                )));
            }
            Some(page) => page as u64,
        };

        let limit = match parse_param(request.limit.as_deref()) {
            None => self.config.default_page_size,
            Some(limit) if limit <= 0 => {
                return Err(StoreError::Validation(format!(
                    "limit must be positive, got {}",
                    limit
                )));
            }
            Some(limit) => limit,
        };

        let skip = page
            .checked_mul(limit as u64)
            .ok_or_else(|| StoreError::Validation("page offset overflows".to_string()))?;

        Ok((skip, limit))
    }
}

impl<T, S> Clone for CollectionService<T, S>
where
    T: Send + Sync + 'static,
    S: DocumentStore<T>,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
            _doc: PhantomData,
        }
    }
}

/// Values that fail to parse are treated as absent.
fn parse_param(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.parse().ok())
}

fn parse_id(raw: &str) -> StoreResult<ObjectId> {
    raw.parse::<ObjectId>()
        .map_err(|_| StoreError::InvalidId(raw.to_string()))
}
