//! User routes: listing and registration.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use domain_store::{Registration, StoreResult, User};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/user", get(list).post(register))
}

/// Every registered user
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All users"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn list(State(state): State<AppState>) -> StoreResult<Json<Vec<User>>> {
    let users = state.users.list_all().await?;
    Ok(Json(users))
}

/// Register a user; a duplicate email returns the existing document
/// instead of inserting a second one
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "Insert outcome, or the existing user for a duplicate email"),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> StoreResult<Json<Registration>> {
    let outcome = state.users.register(user).await?;
    Ok(Json(outcome))
}
