use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;

use backend_application::{AppState, Metrics};
use backend_infrastructure::{AppConfig, JsonAccountRepository, JsonInventoryRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let account_repo = Arc::new(JsonAccountRepository::new(config.accounts_path()));
        let inventory_repo = Arc::new(JsonInventoryRepository::new(config.inventory_path()));

        let state = AppState {
            config: runtime_config,
            account_repo,
            inventory_repo,
            write_lock: Arc::new(Mutex::new(())),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
