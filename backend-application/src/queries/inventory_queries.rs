use backend_domain::services::combine_inventories;
use backend_domain::AggregatedItem;

use crate::{AppError, AppState};

/// Fleet-wide inventory rollup across every stored snapshot.
pub async fn combined_inventory(state: &AppState) -> Result<Vec<AggregatedItem>, AppError> {
    let inventories = state
        .inventory_repo
        .load()
        .await
        .map_err(AppError::Internal)?;
    Ok(combine_inventories(&inventories))
}
