use std::sync::Arc;

use backend_domain::ports::{AccountRepository, InventoryRepository};
use backend_domain::RuntimeConfig;
use tokio::sync::Mutex;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub account_repo: Arc<dyn AccountRepository>,
    pub inventory_repo: Arc<dyn InventoryRepository>,
    /// Serializes every load-mutate-store cycle. Readers never take it.
    pub write_lock: Arc<Mutex<()>>,
    pub metrics: Arc<Metrics>,
}
