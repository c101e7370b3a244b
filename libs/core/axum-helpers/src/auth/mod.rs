//! JWT configuration and bearer-token issuance.

pub mod config;
pub mod token;

pub use config::JwtConfig;
pub use token::{TokenError, TokenIssuer, TOKEN_TTL_SECS};
