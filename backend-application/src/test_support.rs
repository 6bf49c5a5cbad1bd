use std::sync::Arc;

use backend_domain::RuntimeConfig;
use backend_infrastructure::{MemoryAccountRepository, MemoryInventoryRepository};
use tokio::sync::Mutex;

use crate::{AppState, Metrics};

pub fn state() -> AppState {
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            freshness_window_seconds: 60,
            max_body_bytes: 2 * 1024 * 1024,
            request_timeout_seconds: 15,
        },
        account_repo: Arc::new(MemoryAccountRepository::default()),
        inventory_repo: Arc::new(MemoryInventoryRepository::default()),
        write_lock: Arc::new(Mutex::new(())),
        metrics: Arc::new(Metrics::default()),
    }
}
