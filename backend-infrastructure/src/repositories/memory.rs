use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{AccountRecord, AccountRepository, InventoryRepository, ItemEntry};

/// In-memory account registry for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryAccountRepository {
    accounts: RwLock<BTreeMap<String, AccountRecord>>,
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn load(&self) -> anyhow::Result<BTreeMap<String, AccountRecord>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn store(&self, accounts: &BTreeMap<String, AccountRecord>) -> anyhow::Result<()> {
        *self.accounts.write().await = accounts.clone();
        Ok(())
    }

    async fn exists(&self) -> bool {
        true
    }
}

/// In-memory inventory snapshots for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryInventoryRepository {
    inventories: RwLock<BTreeMap<String, Vec<ItemEntry>>>,
}

#[async_trait]
impl InventoryRepository for MemoryInventoryRepository {
    async fn load(&self) -> anyhow::Result<BTreeMap<String, Vec<ItemEntry>>> {
        Ok(self.inventories.read().await.clone())
    }

    async fn store(&self, inventories: &BTreeMap<String, Vec<ItemEntry>>) -> anyhow::Result<()> {
        *self.inventories.write().await = inventories.clone();
        Ok(())
    }

    async fn exists(&self) -> bool {
        true
    }
}
