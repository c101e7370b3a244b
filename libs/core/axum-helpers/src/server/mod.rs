//! Server infrastructure module.
//!
//! This module provides:
//! - Router bootstrap with OpenAPI documentation and common middleware
//! - A liveness endpoint reporting app name and version
//! - Graceful shutdown on ctrl-c / SIGTERM

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{build_router, create_app};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
