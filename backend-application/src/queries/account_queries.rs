use backend_domain::utils::current_unix_secs;
use backend_domain::{AccountStatus, AccountView, FleetStats};

use crate::{AppError, AppState};

/// All known accounts with status derived against a single clock read.
pub async fn list_accounts(state: &AppState) -> Result<Vec<AccountView>, AppError> {
    let accounts = state.account_repo.load().await.map_err(AppError::Internal)?;
    let now = current_unix_secs();
    let window = state.config.freshness_window_seconds;

    Ok(accounts
        .into_values()
        .map(|record| record.into_view(now, window))
        .collect())
}

/// Fleet-wide counters, one pass over the registry. Uses the same freshness
/// rule and a single clock read, so the counts agree with `list_accounts`
/// for the same storage snapshot.
pub async fn fleet_stats(state: &AppState) -> Result<FleetStats, AppError> {
    let accounts = state.account_repo.load().await.map_err(AppError::Internal)?;
    let now = current_unix_secs();
    let window = state.config.freshness_window_seconds;

    let mut stats = FleetStats {
        total_accounts: accounts.len(),
        ..FleetStats::default()
    };
    for record in accounts.values() {
        if AccountStatus::classify(now, record.last_seen_at, window).is_active() {
            stats.active_accounts += 1;
        } else {
            stats.disconnected_accounts += 1;
        }
        stats.total_fish_caught += record.fish_caught;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use backend_domain::utils::current_unix_secs;
    use backend_domain::{AccountRecord, AccountStatus, UpdateSnapshot};

    use super::*;
    use crate::commands::update_commands::apply_update;
    use crate::test_support;

    fn snapshot(json: serde_json::Value) -> UpdateSnapshot {
        serde_json::from_value(json).expect("parse snapshot")
    }

    #[tokio::test]
    async fn fresh_update_lists_as_active_with_payload_fields() {
        let state = test_support::state();
        apply_update(
            &state,
            snapshot(serde_json::json!({
                "player": { "username": "alice", "fishCaught": 5 }
            })),
        )
        .await
        .expect("update");

        let views = list_accounts(&state).await.expect("list");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].record.username, "alice");
        assert_eq!(views[0].record.fish_caught, 5);
        assert_eq!(views[0].record.level, 1);
        assert_eq!(views[0].status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn stale_records_flip_to_disconnected_without_a_write() {
        let state = test_support::state();
        let mut accounts = state.account_repo.load().await.expect("load");
        let mut record = AccountRecord::from_snapshot(
            "bob".to_string(),
            &UpdateSnapshot::default(),
            current_unix_secs(),
        );
        record.last_seen_at -= 61;
        accounts.insert("bob".to_string(), record);
        state.account_repo.store(&accounts).await.expect("store");

        let views = list_accounts(&state).await.expect("list");
        assert_eq!(views[0].status, AccountStatus::Disconnected);
    }

    #[tokio::test]
    async fn stats_agree_with_listing() {
        let state = test_support::state();
        for (name, caught) in [("alice", 5_u64), ("bob", 7)] {
            apply_update(
                &state,
                snapshot(serde_json::json!({
                    "player": { "username": name, "fishCaught": caught }
                })),
            )
            .await
            .expect("update");
        }

        let mut accounts = state.account_repo.load().await.expect("load");
        if let Some(record) = accounts.get_mut("bob") {
            record.last_seen_at -= 120;
        }
        state.account_repo.store(&accounts).await.expect("store");

        let views = list_accounts(&state).await.expect("list");
        let stats = fleet_stats(&state).await.expect("stats");

        assert_eq!(stats.total_accounts, views.len());
        assert_eq!(stats.active_accounts, 1);
        assert_eq!(stats.disconnected_accounts, 1);
        assert_eq!(stats.total_fish_caught, 12);
    }

    #[tokio::test]
    async fn empty_registry_yields_empty_outputs() {
        let state = test_support::state();
        assert!(list_accounts(&state).await.expect("list").is_empty());
        assert_eq!(
            fleet_stats(&state).await.expect("stats"),
            FleetStats::default()
        );
    }
}
