//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the storefront surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for the storefront: products, blogs, carts, users, and token issuance",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        crate::api::health::liveness,
        crate::api::tokens::issue,
        crate::api::products::pagination,
        crate::api::products::list,
        crate::api::products::get_by_id,
        crate::api::blogs::pagination,
        crate::api::blogs::list,
        crate::api::blogs::get_by_id,
        crate::api::carts::list_by_email,
        crate::api::carts::create,
        crate::api::carts::remove,
        crate::api::users::list,
        crate::api::users::register,
    ),
    components(
        schemas(
            crate::api::tokens::TokenResponse,
            domain_store::InsertOutcome,
            domain_store::DeleteOutcome,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Tokens", description = "Bearer-token issuance"),
        (name = "Products", description = "Product catalog access"),
        (name = "Blogs", description = "Blog post access"),
        (name = "Carts", description = "Shopping cart access, keyed by email"),
        (name = "Users", description = "User listing and registration")
    )
)]
pub struct ApiDoc;
