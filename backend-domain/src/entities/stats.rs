// Fleet statistics entity

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total_accounts: usize,
    pub active_accounts: usize,
    pub disconnected_accounts: usize,
    pub total_fish_caught: u64,
}
