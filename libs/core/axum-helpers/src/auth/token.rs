use axum::response::{IntoResponse, Response};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::config::JwtConfig;
use crate::errors::AppError;

/// Issued bearer tokens are valid for one hour.
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for TokenError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[derive(Debug, Serialize)]
struct Claims {
    #[serde(flatten)]
    payload: Map<String, Value>,
    iat: i64,
    exp: i64,
}

/// Stateless issuer of HS256 bearer tokens.
///
/// Issuance is the only operation: nothing in the system verifies the
/// tokens it hands out, so no decode surface is exposed.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Sign an arbitrary payload into a bearer token with a fixed one-hour
    /// expiry. The payload's keys are flattened into the claims alongside
    /// `iat` and `exp`.
    pub fn issue(&self, payload: Map<String, Value>) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            payload,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;

        Ok(token)
    }
}
