//! Storefront API - REST access to the storefront document store.

use axum_helpers::server::{build_router, create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // Startup is the one place a store failure is fatal: bail out with a
    // non-zero exit instead of serving against an unreachable store.
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;

    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    // Unique email index backing user registration
    domain_store::mongodb::ensure_user_indexes(&db).await?;

    // Initialize the application state
    let app_info = config.app;
    let server_config = config.server.clone();
    let state = AppState::new(config, mongo_client, db);

    // Build router with API routes, docs, and cross-cutting middleware
    let router = build_router::<openapi::ApiDoc>(api::routes(state));

    // Merge the name/version health endpoint
    let app = router.merge(health_router(app_info));

    create_app(app, &server_config).await?;

    info!("Storefront API shutdown complete");
    Ok(())
}
