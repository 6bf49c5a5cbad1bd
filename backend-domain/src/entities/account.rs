// Account entity
// Latest-known state reported by one automation client

use serde::{Deserialize, Serialize};

use crate::entities::snapshot::UpdateSnapshot;
use crate::utils::unix_to_rfc3339;
use crate::value_objects::AccountStatus;

pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_ROD: &str = "Unknown Rod";
pub const DEFAULT_BOBBER: &str = "Unknown Bobber";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub level_progress: f64,
    #[serde(default)]
    pub fish_caught: u64,
    #[serde(default)]
    pub playtime: u64,
    #[serde(default = "default_rod")]
    pub equipped_rod: String,
    #[serde(default = "default_bobber")]
    pub equipped_bobber: String,
    #[serde(default)]
    pub last_seen_at: i64,
}

fn default_level() -> u32 {
    DEFAULT_LEVEL
}

fn default_rod() -> String {
    DEFAULT_ROD.to_string()
}

fn default_bobber() -> String {
    DEFAULT_BOBBER.to_string()
}

impl AccountRecord {
    /// Build the stored record for one snapshot. Absent payload fields take
    /// the documented defaults, never values from a previously stored record.
    pub fn from_snapshot(username: String, snapshot: &UpdateSnapshot, now: i64) -> Self {
        let player = snapshot.player.as_ref();
        let equipment = snapshot.equipment.as_ref();
        Self {
            display_name: player
                .and_then(|p| p.display_name.clone())
                .unwrap_or_else(|| username.clone()),
            level: player.and_then(|p| p.level).unwrap_or(DEFAULT_LEVEL),
            level_progress: player.and_then(|p| p.level_progress).unwrap_or(0.0),
            fish_caught: player.and_then(|p| p.fish_caught).unwrap_or(0),
            playtime: player.and_then(|p| p.playtime).unwrap_or(0),
            equipped_rod: equipment
                .and_then(|e| e.rod.clone())
                .unwrap_or_else(default_rod),
            equipped_bobber: equipment
                .and_then(|e| e.bobber.clone())
                .unwrap_or_else(default_bobber),
            last_seen_at: now,
            username,
        }
    }

    /// Dashboard view of the record: status derived against `now`, timestamp
    /// rendered for display. Status is never stored.
    pub fn into_view(self, now: i64, window_seconds: i64) -> AccountView {
        AccountView {
            status: AccountStatus::classify(now, self.last_seen_at, window_seconds),
            last_active: unix_to_rfc3339(self.last_seen_at),
            record: self,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[serde(flatten)]
    pub record: AccountRecord,
    pub status: AccountStatus,
    pub last_active: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_snapshot_applies_documented_defaults() {
        let snapshot: UpdateSnapshot =
            serde_json::from_value(serde_json::json!({ "player": { "username": "alice" } }))
                .expect("parse snapshot");
        let record = AccountRecord::from_snapshot("alice".to_string(), &snapshot, 1_000);

        assert_eq!(record.username, "alice");
        assert_eq!(record.display_name, "alice");
        assert_eq!(record.level, 1);
        assert_eq!(record.level_progress, 0.0);
        assert_eq!(record.fish_caught, 0);
        assert_eq!(record.playtime, 0);
        assert_eq!(record.equipped_rod, "Unknown Rod");
        assert_eq!(record.equipped_bobber, "Unknown Bobber");
        assert_eq!(record.last_seen_at, 1_000);
    }

    #[test]
    fn from_snapshot_prefers_payload_fields() {
        let snapshot: UpdateSnapshot = serde_json::from_value(serde_json::json!({
            "player": {
                "username": "alice",
                "displayName": "Alice",
                "level": 12,
                "levelProgress": 44.5,
                "fishCaught": 321,
                "playtime": 7200
            },
            "equipment": { "rod": "Carbon Rod", "bobber": "Neon Bobber" }
        }))
        .expect("parse snapshot");
        let record = AccountRecord::from_snapshot("alice".to_string(), &snapshot, 5);

        assert_eq!(record.display_name, "Alice");
        assert_eq!(record.level, 12);
        assert_eq!(record.level_progress, 44.5);
        assert_eq!(record.fish_caught, 321);
        assert_eq!(record.playtime, 7200);
        assert_eq!(record.equipped_rod, "Carbon Rod");
        assert_eq!(record.equipped_bobber, "Neon Bobber");
    }

    #[test]
    fn view_serializes_flat_with_derived_fields() {
        let snapshot = UpdateSnapshot::default();
        let record = AccountRecord::from_snapshot("bob".to_string(), &snapshot, 100);
        let view = record.into_view(120, 60);

        let value = serde_json::to_value(&view).expect("serialize view");
        assert_eq!(value["username"], "bob");
        assert_eq!(value["status"], "active");
        assert_eq!(value["lastActive"], "1970-01-01T00:01:40Z");
        assert_eq!(value["lastSeenAt"], 100);
    }
}
