// Snapshot payload
// One telemetry push from an automation client

use serde::Deserialize;

use crate::entities::inventory::ItemEntry;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSnapshot {
    #[serde(default)]
    pub player: Option<PlayerInfo>,
    #[serde(default)]
    pub equipment: Option<EquipmentInfo>,
    #[serde(default)]
    pub inventory: Option<Vec<ItemEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub level_progress: Option<f64>,
    #[serde(default)]
    pub fish_caught: Option<u64>,
    #[serde(default)]
    pub playtime: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquipmentInfo {
    #[serde(default)]
    pub rod: Option<String>,
    #[serde(default)]
    pub bobber: Option<String>,
}

impl UpdateSnapshot {
    /// Trimmed username, or None when the payload cannot identify a client.
    pub fn username(&self) -> Option<String> {
        let name = self.player.as_ref()?.username.as_deref()?.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
