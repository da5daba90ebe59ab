use core::str::FromStr;

use serde::{Deserialize, Serialize};

use drilltrack_core::{DomainError, ToolId};

/// Drilling-tool model line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolModel {
    T45,
    T50,
    T51,
}

impl ToolModel {
    /// All model lines, in catalog order.
    pub const ALL: [ToolModel; 3] = [ToolModel::T45, ToolModel::T50, ToolModel::T51];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolModel::T45 => "T45",
            ToolModel::T50 => "T50",
            ToolModel::T51 => "T51",
        }
    }
}

impl core::fmt::Display for ToolModel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "T45" | "t45" => Ok(ToolModel::T45),
            "T50" | "t50" => Ok(ToolModel::T50),
            "T51" | "t51" => Ok(ToolModel::T51),
            _ => Err(DomainError::validation(format!(
                "unknown tool model: {s} (expected one of: T45, T50, T51)"
            ))),
        }
    }
}

/// Part category within a model line.
///
/// Canonical labels are the Portuguese catalog terms.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    /// Shank adapter ("Punho").
    #[serde(rename = "Punho")]
    Handle,
    /// Extension rod ("Haste").
    #[serde(rename = "Haste")]
    Rod,
    /// Drill bit.
    Bit,
}

impl ToolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Handle => "Punho",
            ToolCategory::Rod => "Haste",
            ToolCategory::Bit => "Bit",
        }
    }
}

impl core::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Punho" => Ok(ToolCategory::Handle),
            "Haste" => Ok(ToolCategory::Rod),
            "Bit" => Ok(ToolCategory::Bit),
            _ => Err(DomainError::validation(format!(
                "unknown tool category: {s} (expected one of: Punho, Haste, Bit)"
            ))),
        }
    }
}

/// A stock-keeping unit of the tool catalog.
///
/// `stock` is the only field mutated after construction, and only through
/// [`crate::store::InventoryStore::withdraw`]. It never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolItem {
    pub id: ToolId,
    pub name: String,
    pub model: ToolModel,
    pub category: ToolCategory,
    pub stock: i64,
    /// Reorder threshold, constant per item.
    pub min_stock: i64,
}
