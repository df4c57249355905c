use axum_helpers::{create_app, create_permissive_cors_layer, not_found};
use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use database::DocumentStore;
use database::mongodb::{MongoConfig, connect_from_config};
use domain_storefront::{MongoStorefrontRepository, StorefrontService, seed};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Connect to the document store, or fall back to the explicit
/// unavailable state. The API serves degraded responses without a
/// database rather than refusing to start.
async fn init_store() -> DocumentStore {
    let mongo_config = match MongoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!("Database configuration incomplete, starting without a database: {}", e);
            return DocumentStore::unavailable();
        }
    };

    match connect_from_config(&mongo_config).await {
        Ok(client) => {
            let store = DocumentStore::connected(client.database(&mongo_config.database));
            info!(database = %mongo_config.database, "Document store connected");
            store
        }
        Err(e) => {
            warn!("MongoDB connection failed, starting without a database: {}", e);
            DocumentStore::unavailable()
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let store = init_store().await;
    let repository = MongoStorefrontRepository::new(store.clone());

    if store.is_available() {
        if let Err(e) = seed::seed_products_if_empty(&repository).await {
            warn!("Seed error: {}", e);
        }
    }

    let service = StorefrontService::new(repository);
    let state = AppState { store };

    let app = api::routes(service, state)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(create_permissive_cors_layer());

    info!("Starting grosir API");

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Grosir API shutdown complete");
    Ok(())
}
