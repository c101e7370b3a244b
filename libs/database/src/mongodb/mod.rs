//! MongoDB connector and utilities.
//!
//! Provides connection setup from code or environment variables (with the
//! `config` feature) and lightweight health checks.

pub mod config;
pub mod connector;
pub mod health;

pub use config::MongoConfig;
pub use connector::{connect, connect_from_config, MongoError};
pub use health::{check_health, check_health_detailed, HealthStatus};
