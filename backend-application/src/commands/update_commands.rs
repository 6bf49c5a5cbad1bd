use backend_domain::utils::current_unix_secs;
use backend_domain::{AccountRecord, UpdateSnapshot};

use crate::{AppError, AppState};

/// Apply one telemetry snapshot: upsert the account record and, when the
/// payload carries an inventory, replace that user's stored snapshot.
///
/// Both documents are written whole and synchronously before this returns.
/// The state write lock serializes the load-mutate-store cycle so concurrent
/// updates to different usernames cannot drop each other.
pub async fn apply_update(state: &AppState, snapshot: UpdateSnapshot) -> Result<String, AppError> {
    let Some(username) = snapshot.username() else {
        state.metrics.record_rejection();
        return Err(AppError::BadRequest("Missing username".to_string()));
    };

    let now = current_unix_secs();
    let record = AccountRecord::from_snapshot(username.clone(), &snapshot, now);
    let item_count = snapshot.inventory.as_ref().map(Vec::len).unwrap_or(0);

    let _guard = state.write_lock.lock().await;

    let mut accounts = state.account_repo.load().await.map_err(AppError::Internal)?;
    accounts.insert(username.clone(), record);
    state
        .account_repo
        .store(&accounts)
        .await
        .map_err(AppError::Internal)?;

    if let Some(items) = snapshot.inventory {
        let mut inventories = state
            .inventory_repo
            .load()
            .await
            .map_err(AppError::Internal)?;
        inventories.insert(username.clone(), items);
        state
            .inventory_repo
            .store(&inventories)
            .await
            .map_err(AppError::Internal)?;
    }

    state.metrics.record_update(item_count);
    Ok(username)
}
