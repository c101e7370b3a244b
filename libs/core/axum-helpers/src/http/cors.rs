use tower_http::cors::{Any, CorsLayer};

/// Creates a permissive CORS layer for public APIs.
///
/// Allows any origin, method and header, without credentials. Suitable for
/// a read-mostly storefront surface consumed by arbitrary frontends.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
