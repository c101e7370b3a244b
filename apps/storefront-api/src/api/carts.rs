//! Cart routes: list by owner email, add, remove.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use domain_store::{CartItem, DeleteOutcome, InsertOutcome, StoreResult};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/carts", get(list_by_email).post(create))
        .route("/carts/{id}", delete(remove))
}

/// Owner filter for cart listings.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CartQuery {
    pub email: Option<String>,
}

/// Cart items owned by an email address.
///
/// No email (or an empty one) is an empty cart: the store is not consulted.
#[utoipa::path(
    get,
    path = "/carts",
    tag = "Carts",
    params(CartQuery),
    responses(
        (status = 200, description = "Cart items for the email, [] when absent"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn list_by_email(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> StoreResult<Json<Vec<CartItem>>> {
    let items = state
        .carts
        .find_by_field("email", query.email.as_deref())
        .await?;
    Ok(Json(items))
}

/// Add a cart item, stored verbatim
#[utoipa::path(
    post,
    path = "/carts",
    tag = "Carts",
    responses(
        (status = 200, description = "Insert outcome", body = InsertOutcome),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn create(
    State(state): State<AppState>,
    Json(cart): Json<CartItem>,
) -> StoreResult<Json<InsertOutcome>> {
    let outcome = state.carts.insert(cart).await?;
    Ok(Json(outcome))
}

/// Remove a cart item by id
#[utoipa::path(
    delete,
    path = "/carts/{id}",
    tag = "Carts",
    params(
        ("id" = String, Path, description = "Cart item id (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteOutcome),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StoreResult<Json<DeleteOutcome>> {
    let outcome = state.carts.delete_by_id(&id).await?;
    Ok(Json(outcome))
}
