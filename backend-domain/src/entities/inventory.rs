// Inventory entities

use serde::{Deserialize, Serialize};

pub const DEFAULT_RARITY: &str = "common";

/// One line of a client's reported inventory. Quantities are not validated;
/// whatever the client reports is stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default)]
    pub value: i64,
}

fn default_rarity() -> String {
    DEFAULT_RARITY.to_string()
}

/// Fleet-wide rollup of one item name. Derived on read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedItem {
    pub name: String,
    pub quantity: i64,
    pub rarity: String,
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_entry_defaults() {
        let entry: ItemEntry =
            serde_json::from_value(serde_json::json!({ "name": "Carp" })).expect("parse entry");
        assert_eq!(entry.quantity, 0);
        assert_eq!(entry.rarity, "common");
        assert_eq!(entry.value, 0);
    }
}
