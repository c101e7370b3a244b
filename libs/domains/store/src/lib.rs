//! Store Domain
//!
//! One generic collection-access implementation shared by every collection
//! in the document store (products, blog posts, carts, users), plus the
//! user-registration policy layered on top of it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Service      │  ← pagination defaults, id parsing, query guards
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │  DocumentStore   │  ← data access (trait + MongoDB implementation)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │     Models       │  ← opaque documents, outcome DTOs
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_store::{
//!     mongodb::MongoDocumentStore, CollectionConfig, CollectionService, Product,
//!     PRODUCT_COLLECTION,
//! };
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("storefront");
//!
//! let store = MongoDocumentStore::<Product>::new(&db, PRODUCT_COLLECTION, Duration::from_secs(10));
//! let products = CollectionService::new(
//!     store,
//!     CollectionConfig {
//!         name: PRODUCT_COLLECTION,
//!         default_page_size: 6,
//!     },
//! );
//!
//! let first_page = products.paginate(Default::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;
pub mod users;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use models::{
    BlogPost, CartItem, DeleteOutcome, InsertOutcome, Product, Registration, User,
};
pub use mongodb::MongoDocumentStore;
pub use repository::DocumentStore;
pub use service::{CollectionConfig, CollectionService, PageRequest};
pub use users::UserService;

/// Logical collection names, fixed for the storefront.
pub const PRODUCT_COLLECTION: &str = "products";
pub const BLOG_COLLECTION: &str = "blogs";
pub const CART_COLLECTION: &str = "carts";
pub const USER_COLLECTION: &str = "users";
