use serde::{Deserialize, Serialize};

use drilltrack_inventory::ToolItem;

/// Stock alert level for a catalog item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Critical,
    Warning,
    Ok,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "critical",
            AlertLevel::Warning => "warning",
            AlertLevel::Ok => "ok",
        }
    }
}

impl core::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an item against its reorder threshold.
///
/// Critical at or below `min_stock` (checked first, so it wins any tie);
/// warning up to 1.5x the threshold. The warning band compares
/// `2 * stock <= 3 * min_stock`, which keeps the arithmetic in integers while
/// matching the 1.5x boundary exactly (both bounds inclusive).
pub fn alert_level(item: &ToolItem) -> AlertLevel {
    if item.stock <= item.min_stock {
        AlertLevel::Critical
    } else if 2 * item.stock <= 3 * item.min_stock {
        AlertLevel::Warning
    } else {
        AlertLevel::Ok
    }
}
