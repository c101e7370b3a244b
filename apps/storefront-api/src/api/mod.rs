//! API routes module
//!
//! Each route maps to exactly one collection-service operation; the result
//! (or its error, converted at this boundary) is serialized back verbatim.

pub mod blogs;
pub mod carts;
pub mod health;
pub mod products;
pub mod tokens;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(tokens::router())
        .merge(products::router())
        .merge(blogs::router())
        .merge(carts::router())
        .merge(users::router())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    //! Router tests that never need a live store: the client keeps its
    //! connections lazy, and every path exercised here short-circuits
    //! before a store round-trip. Flows that do touch MongoDB are
    //! `#[ignore]`d and run against a local instance.

    use super::routes;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use axum_helpers::{build_router, JwtConfig};
    use core_config::{app_info, server::ServerConfig};
    use database::mongodb::MongoConfig;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot()

    const SECRET: &str = "router-test-secret-that-is-long-enough!";

    fn test_config() -> Config {
        Config {
            app: app_info!(),
            mongodb: MongoConfig::with_database("mongodb://localhost:27017", "storefront_test"),
            server: ServerConfig::default(),
            jwt: JwtConfig::new(SECRET),
            environment: Environment::Development,
        }
    }

    async fn test_app() -> Router {
        let config = test_config();
        // The driver connects lazily; building state does not touch the store.
        let client = mongodb::Client::with_uri_str(config.mongodb.connection_url())
            .await
            .unwrap();
        let db = client.database(config.mongodb.database());
        build_router::<ApiDoc>(routes(AppState::new(config, client, db)))
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_liveness_string_at_root() {
        let app = test_app().await;

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            String::from_utf8(bytes.to_vec()).unwrap(),
            "Storefront API is running"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_returns_structured_404() {
        let app = test_app().await;

        let response = app.oneshot(get("/nope")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], json!("NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_jwt_issues_decodable_token() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/jwt")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({ "email": "a@x.com" })).unwrap(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response.into_body()).await;
        let token = body["token"].as_str().unwrap();

        let decoded = jsonwebtoken::decode::<Value>(
            token,
            &jsonwebtoken::DecodingKey::from_secret(SECRET.as_bytes()),
            &jsonwebtoken::Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims["email"], json!("a@x.com"));
        let iat = decoded.claims["iat"].as_i64().unwrap();
        let exp = decoded.claims["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, 3600);
    }

    #[tokio::test]
    async fn test_jwt_rejects_non_object_payload() {
        let app = test_app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/jwt")
            .header("content-type", "application/json")
            .body(Body::from("[1, 2, 3]"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_malformed_product_id_is_a_client_error() {
        let app = test_app().await;

        let response = app.oneshot(get("/product/not-an-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response.into_body()).await;
        assert_eq!(body["error"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_zero_limit_is_rejected() {
        let app = test_app().await;

        let response = app.oneshot(get("/pagination?limit=0")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_limit_is_rejected_on_blogs_pagination() {
        let app = test_app().await;

        let response = app
            .oneshot(get("/blogsPagination?limit=-2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_carts_without_email_is_empty_list() {
        let app = test_app().await;

        let response = app.oneshot(get("/carts")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_carts_with_empty_email_is_empty_list() {
        let app = test_app().await;

        let response = app.oneshot(get("/carts?email=")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response.into_body()).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_cart_delete_id_is_a_client_error() {
        let app = test_app().await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/carts/zzz")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_cart_and_user_flows_end_to_end() {
        let config = test_config();
        let client = database::mongodb::connect_from_config(&config.mongodb)
            .await
            .unwrap();
        let db = client.database(config.mongodb.database());
        db.collection::<mongodb::bson::Document>("carts")
            .drop()
            .await
            .ok();
        db.collection::<mongodb::bson::Document>("users")
            .drop()
            .await
            .ok();
        domain_store::mongodb::ensure_user_indexes(&db).await.unwrap();

        let app = build_router::<ApiDoc>(routes(AppState::new(config, client, db)));

        // Insert a cart item
        let request = Request::builder()
            .method("POST")
            .uri("/carts")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({ "email": "a@x.com", "sku": "kb-01" })).unwrap(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let inserted = json_body(response.into_body()).await;
        let cart_id = inserted["inserted_id"].as_str().unwrap().to_string();

        // It shows up for its owner
        let response = app
            .clone()
            .oneshot(get("/carts?email=a@x.com"))
            .await
            .unwrap();
        let items = json_body(response.into_body()).await;
        assert_eq!(items.as_array().unwrap().len(), 1);
        assert_eq!(items[0]["_id"], json!(cart_id));

        // Delete it
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/carts/{}", cart_id))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let outcome = json_body(response.into_body()).await;
        assert_eq!(outcome["deleted_count"], json!(1));

        // First registration inserts
        let register = |email: &str| {
            Request::builder()
                .method("POST")
                .uri("/user")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_string(&json!({ "email": email })).unwrap(),
                ))
                .unwrap()
        };
        let response = app.clone().oneshot(register("b@x.com")).await.unwrap();
        let first = json_body(response.into_body()).await;
        let user_id = first["inserted_id"].as_str().unwrap().to_string();

        // Second registration returns the existing document, no new id
        let response = app.clone().oneshot(register("b@x.com")).await.unwrap();
        let second = json_body(response.into_body()).await;
        assert!(second.get("inserted_id").is_none());
        assert_eq!(second["_id"], json!(user_id));
        assert_eq!(second["email"], json!("b@x.com"));
    }
}
