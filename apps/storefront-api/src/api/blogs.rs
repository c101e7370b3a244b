//! Blog routes, the same access pattern as products with its own paths
//! and default page size.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use domain_store::{BlogPost, PageRequest, StoreResult};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogsPagination", get(pagination))
        .route("/blogs", get(list))
        .route("/blogs/{id}", get(get_by_id))
}

/// Page of blog posts at offset `page * limit`
#[utoipa::path(
    get,
    path = "/blogsPagination",
    tag = "Blogs",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of blog posts"),
        (status = 400, description = "Rejected pagination parameters"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn pagination(
    State(state): State<AppState>,
    Query(request): Query<PageRequest>,
) -> StoreResult<Json<Vec<BlogPost>>> {
    let posts = state.blogs.paginate(request).await?;
    Ok(Json(posts))
}

/// Every blog post
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    responses(
        (status = 200, description = "All blog posts"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn list(State(state): State<AppState>) -> StoreResult<Json<Vec<BlogPost>>> {
    let posts = state.blogs.list_all().await?;
    Ok(Json(posts))
}

/// One blog post, or `null` when the id matches nothing
#[utoipa::path(
    get,
    path = "/blogs/{id}",
    tag = "Blogs",
    params(
        ("id" = String, Path, description = "Blog post id (ObjectId hex)")
    ),
    responses(
        (status = 200, description = "Blog post or null"),
        (status = 400, description = "Malformed id"),
        (status = 500, description = "Store failure")
    )
)]
pub(crate) async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StoreResult<Json<Option<BlogPost>>> {
    let post = state.blogs.get_by_id(&id).await?;
    Ok(Json(post))
}
