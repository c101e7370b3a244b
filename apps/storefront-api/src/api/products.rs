//! Product routes: paginated listing, full listing, lookup by id.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use domain_store::{PageRequest, Product, StoreResult};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pagination", get(pagination))
        .route("/product", get(list))
        .route("/product/{id}", get(get_by_id))
}

/// Page of products at offset `page * limit`
#[utoipa::path(
    get,
    path = "/pagination",
    tag = "Products",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of products"),
        (status = 400, description = "Rejected pagination parameters"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn pagination(
    State(state): State<AppState>,
    Query(request): Query<PageRequest>,
) -> StoreResult<Json<Vec<Product>>> {
    let products = state.products.paginate(request).await?;
    Ok(Json(products))
}

/// Every product in the catalog
#[utoipa::path(
    get,
    path = "/product",
    tag = "Products",
    responses(
        (status = 200, description = "All products"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn list(State(state): State<AppState>) -> StoreResult<Json<Vec<Product>>> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// One product, or `null` when the id matches nothing
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Product or null"),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StoreResult<Json<Option<Product>>> {
    let product = state.products.get_by_id(&id).await?;
    Ok(Json(product))
}
