use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::entities::{AccountRecord, ItemEntry};

/// Whole-document store for the account registry (username -> record).
/// Implementations must self-heal unreadable documents into an empty map;
/// only genuine I/O failures surface as errors.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn load(&self) -> anyhow::Result<BTreeMap<String, AccountRecord>>;
    async fn store(&self, accounts: &BTreeMap<String, AccountRecord>) -> anyhow::Result<()>;
    async fn exists(&self) -> bool;
}

/// Whole-document store for per-user inventory snapshots.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    async fn load(&self) -> anyhow::Result<BTreeMap<String, Vec<ItemEntry>>>;
    async fn store(&self, inventories: &BTreeMap<String, Vec<ItemEntry>>) -> anyhow::Result<()>;
    async fn exists(&self) -> bool;
}
