//! Keygate
//!
//! An HTTP service that manages bearer API keys scoped to named caches:
//! - Listing a caller's caches and the keys of a single cache
//! - Creating keys bound to one or more caches
//! - Expanding a cache with existing keys
//! - Removing key associations, guarded so a cache never loses its
//!   last remaining key
//!
//! Keys double as bearer credentials: the id returned by key creation
//! authenticates subsequent requests.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::keys::Store;
use infrastructure::keys::KeyService;
use infrastructure::store::{InMemoryStore, PostgresConfig, PostgresStore, StoreBackend};

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend =
        StoreBackend::from_str(&config.storage.backend).unwrap_or(StoreBackend::Memory);

    info!("Store backend: {:?}", backend);

    let store: Arc<dyn Store> = match backend {
        StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        StoreBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pg_config = PostgresConfig::new(database_url)
                .with_max_connections(config.storage.max_connections)
                .with_connect_timeout(config.storage.connect_timeout_secs);
            let store = PostgresStore::connect(&pg_config).await?;
            store.ensure_schema().await?;
            info!("PostgreSQL connection established");

            Arc::new(store)
        }
    };

    let key_service = Arc::new(KeyService::new(store));

    Ok(AppState::new(key_service))
}
