//! Application state management.
//!
//! The shared state passed to all request handlers: configuration, the
//! MongoDB client, one collection service per collection, and the token
//! issuer. Cloned per handler; every member is a cheap handle.

use std::time::Duration;

use axum_helpers::TokenIssuer;
use domain_store::{
    mongodb::MongoDocumentStore, BlogPost, CartItem, CollectionConfig, CollectionService, Product,
    User, UserService, BLOG_COLLECTION, CART_COLLECTION, PRODUCT_COLLECTION, USER_COLLECTION,
};
use mongodb::{Client, Database};

use crate::config::Config;

/// Default page sizes differ per collection; this asymmetry is
/// configuration, inherited from the storefront frontend's expectations.
const PRODUCT_PAGE_SIZE: i64 = 6;
const BLOG_PAGE_SIZE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 6;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    pub products: CollectionService<Product, MongoDocumentStore<Product>>,
    pub blogs: CollectionService<BlogPost, MongoDocumentStore<BlogPost>>,
    pub carts: CollectionService<CartItem, MongoDocumentStore<CartItem>>,
    pub users: UserService<MongoDocumentStore<User>>,
    pub tokens: TokenIssuer,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client, db: Database) -> Self {
        let op_timeout = Duration::from_secs(config.mongodb.op_timeout_secs);

        let products = CollectionService::new(
            MongoDocumentStore::new(&db, PRODUCT_COLLECTION, op_timeout),
            CollectionConfig {
                name: PRODUCT_COLLECTION,
                default_page_size: PRODUCT_PAGE_SIZE,
            },
        );

        let blogs = CollectionService::new(
            MongoDocumentStore::new(&db, BLOG_COLLECTION, op_timeout),
            CollectionConfig {
                name: BLOG_COLLECTION,
                default_page_size: BLOG_PAGE_SIZE,
            },
        );

        let carts = CollectionService::new(
            MongoDocumentStore::new(&db, CART_COLLECTION, op_timeout),
            CollectionConfig {
                name: CART_COLLECTION,
                default_page_size: DEFAULT_PAGE_SIZE,
            },
        );

        let users = UserService::new(
            MongoDocumentStore::new(&db, USER_COLLECTION, op_timeout),
            CollectionConfig {
                name: USER_COLLECTION,
                default_page_size: DEFAULT_PAGE_SIZE,
            },
        );

        let tokens = TokenIssuer::new(&config.jwt);

        Self {
            config,
            mongo_client,
            products,
            blogs,
            carts,
            users,
            tokens,
        }
    }
}
