use std::collections::{BTreeMap, HashMap};

use crate::entities::{AggregatedItem, ItemEntry};

/// Merge every user's inventory snapshot into one list keyed by item name.
///
/// Quantities accumulate across all entries sharing a name. Rarity and value
/// stick from the first entry seen for that name ("first writer wins"); later
/// conflicting metadata is ignored rather than treated as an error. Users are
/// visited in sorted order, so the winner is stable for a fixed storage state.
/// Output follows first-seen item order.
pub fn combine_inventories(
    inventories: &BTreeMap<String, Vec<ItemEntry>>,
) -> Vec<AggregatedItem> {
    let mut combined: Vec<AggregatedItem> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for items in inventories.values() {
        for item in items {
            match slots.get(item.name.as_str()) {
                Some(&slot) => combined[slot].quantity += item.quantity,
                None => {
                    slots.insert(item.name.as_str(), combined.len());
                    combined.push(AggregatedItem {
                        name: item.name.clone(),
                        quantity: item.quantity,
                        rarity: item.rarity.clone(),
                        value: item.value,
                    });
                }
            }
        }
    }

    combined
}
