use std::collections::BTreeMap;

use drilltrack_inventory::{InventoryState, ToolItem, ToolModel};

/// Sum of stock over the whole catalog.
pub fn total_stock(state: &InventoryState) -> i64 {
    state.inventory.iter().map(|i| i.stock).sum()
}

/// Items at or below their reorder threshold, in catalog order.
pub fn critical_items(state: &InventoryState) -> Vec<&ToolItem> {
    state
        .inventory
        .iter()
        .filter(|i| i.stock <= i.min_stock)
        .collect()
}

/// Stock summed per model line.
///
/// Every model is present in the result, zero when it has no items.
pub fn stock_by_model(state: &InventoryState) -> BTreeMap<ToolModel, i64> {
    let mut totals: BTreeMap<ToolModel, i64> =
        ToolModel::ALL.into_iter().map(|m| (m, 0)).collect();
    for item in &state.inventory {
        *totals.entry(item.model).or_insert(0) += item.stock;
    }
    totals
}
