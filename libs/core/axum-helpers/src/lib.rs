//! # Axum Helpers
//!
//! A collection of utilities and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT configuration and bearer-token issuance
//! - **[`server`]**: Router bootstrap, health endpoint, graceful shutdown
//! - **[`http`]**: CORS layers
//! - **[`errors`]**: Structured error responses with error codes

pub mod auth;
pub mod errors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{JwtConfig, TokenError, TokenIssuer, TOKEN_TTL_SECS};

// Re-export server types
pub use server::{build_router, create_app, health_router, shutdown_signal, HealthResponse};

// Re-export HTTP middleware
pub use http::create_permissive_cors_layer;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};
