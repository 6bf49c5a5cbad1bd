use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{AccountRecord, AccountRepository, InventoryRepository, ItemEntry};

/// Durable account registry: one JSON document, written whole.
pub struct JsonAccountRepository {
    path: PathBuf,
}

impl JsonAccountRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Durable per-user inventory snapshots: one JSON document, written whole.
pub struct JsonInventoryRepository {
    path: PathBuf,
}

impl JsonInventoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AccountRepository for JsonAccountRepository {
    async fn load(&self) -> anyhow::Result<BTreeMap<String, AccountRecord>> {
        read_document(&self.path).await
    }

    async fn store(&self, accounts: &BTreeMap<String, AccountRecord>) -> anyhow::Result<()> {
        write_document(&self.path, accounts).await
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[async_trait]
impl InventoryRepository for JsonInventoryRepository {
    async fn load(&self) -> anyhow::Result<BTreeMap<String, Vec<ItemEntry>>> {
        read_document(&self.path).await
    }

    async fn store(&self, inventories: &BTreeMap<String, Vec<ItemEntry>>) -> anyhow::Result<()> {
        write_document(&self.path, inventories).await
    }

    async fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Missing or unreadable documents read as empty; monitoring must keep
/// serving even when a document was lost or half-written.
async fn read_document<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) => {
            warn!("failed to read {}, treating as empty: {}", path.display(), err);
            return Ok(T::default());
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(
                "failed to parse {}, treating as empty: {}",
                path.display(),
                err
            );
            Ok(T::default())
        }
    }
}

/// Whole-document write with atomic-replace semantics: the document is
/// staged next to its final path and renamed into place.
async fn write_document<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let content = serde_json::to_string_pretty(value)?;
    let staging = staging_path(path);
    fs::write(&staging, content).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
