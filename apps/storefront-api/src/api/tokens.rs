//! Token issuance route.
//!
//! Tokens are issued here and nowhere verified: no route in this API checks
//! them. The endpoint exists for frontends that hold the token against
//! future use.

use axum::{extract::State, routing::post, Json, Router};
use axum_helpers::TokenError;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/jwt", post(issue))
}

/// Sign the request payload into a one-hour bearer token
#[utoipa::path(
    post,
    path = "/jwt",
    tag = "Tokens",
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Signing failure")
    )
)]
pub(crate) async fn issue(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<TokenResponse>, TokenError> {
    let token = state.tokens.issue(payload)?;
    Ok(Json(TokenResponse { token }))
}
