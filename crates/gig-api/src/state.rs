//! Application state.

use std::sync::Arc;

use gig_store::StoreClient;

use crate::auth::SessionService;
use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<StoreClient>,
    pub session: Arc<SessionService>,
}

impl AppState {
    /// Create new application state, connecting the store from environment
    /// variables.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let store = StoreClient::from_env().await?;
        Ok(Self::with_store(config, store))
    }

    /// Build state around an existing store handle.
    pub fn with_store(config: ApiConfig, store: StoreClient) -> Self {
        let session = SessionService::from_config(&config);
        Self {
            config,
            store: Arc::new(store),
            session: Arc::new(session),
        }
    }
}
