use std::sync::Arc;

use dcclink_infra::{InventoryStore, SqliteInventoryStore, StoreError};

use crate::config::ServerConfig;

/// Everything a handler needs, built once at startup and shared via `Extension`.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn InventoryStore>,
    config: Arc<ServerConfig>,
}

impl AppServices {
    pub fn new(store: Arc<dyn InventoryStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    pub fn store(&self) -> &dyn InventoryStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Close the store. Call once the server has stopped accepting requests.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}

/// Open the SQLite store named by `config.database_url` and wire the services.
pub async fn build_services(config: ServerConfig) -> Result<AppServices, StoreError> {
    let store = SqliteInventoryStore::open(&config.database_url).await?;
    Ok(AppServices::new(Arc::new(store), config))
}
