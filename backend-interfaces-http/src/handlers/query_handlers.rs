use axum::extract::State;
use axum::Json;
use serde::Serialize;

use backend_application::queries::{account_queries, inventory_queries};
use backend_application::AppState;
use backend_domain::{AccountView, AggregatedItem, FleetStats};

use crate::error::HttpError;

#[derive(Serialize)]
pub struct AccountsResponse {
    pub success: bool,
    pub accounts: Vec<AccountView>,
}

#[derive(Serialize)]
pub struct InventoryResponse {
    pub success: bool,
    pub inventory: Vec<AggregatedItem>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: FleetStats,
}

pub async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<AccountsResponse>, HttpError> {
    let accounts = account_queries::list_accounts(&state).await?;
    Ok(Json(AccountsResponse {
        success: true,
        accounts,
    }))
}

pub async fn combined_inventory(
    State(state): State<AppState>,
) -> Result<Json<InventoryResponse>, HttpError> {
    let inventory = inventory_queries::combined_inventory(&state).await?;
    Ok(Json(InventoryResponse {
        success: true,
        inventory,
    }))
}

pub async fn fleet_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, HttpError> {
    let stats = account_queries::fleet_stats(&state).await?;
    Ok(Json(StatsResponse {
        success: true,
        stats,
    }))
}
