use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drilltrack_analytics::{AlertLevel, alert_level};
use drilltrack_core::{DomainResult, ToolId};
use drilltrack_inventory::{Supervisor, ToolItem, WithdrawTool, Withdrawal};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateWithdrawalRequest {
    pub tool_id: String,
    pub quantity: i64,
    pub reason: String,
    pub supervisor: String,
}

impl CreateWithdrawalRequest {
    /// Parse the free-text vocabulary fields into domain types.
    ///
    /// Unknown reasons/supervisors fail here with `Validation`; an unknown
    /// tool id is only detected by the store (`NotFound`).
    pub fn into_domain(self) -> DomainResult<WithdrawTool> {
        Ok(WithdrawTool {
            tool_id: ToolId::new(self.tool_id),
            quantity: self.quantity,
            reason: self.reason.parse()?,
            supervisor: Supervisor::parse(&self.supervisor)?,
        })
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct InventoryItemResponse {
    pub id: String,
    pub name: String,
    pub model: String,
    pub category: String,
    pub stock: i64,
    pub min_stock: i64,
    pub status: AlertLevel,
}

impl InventoryItemResponse {
    pub fn from_item(item: &ToolItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            model: item.model.to_string(),
            category: item.category.to_string(),
            stock: item.stock,
            min_stock: item.min_stock,
            status: alert_level(item),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WithdrawalResponse {
    pub id: String,
    pub tool_id: String,
    pub tool_name: String,
    pub model: String,
    pub quantity: i64,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub supervisor: String,
}

impl WithdrawalResponse {
    pub fn from_withdrawal(withdrawal: &Withdrawal) -> Self {
        Self {
            id: withdrawal.id.to_string(),
            tool_id: withdrawal.tool_id.to_string(),
            tool_name: withdrawal.tool_name.clone(),
            model: withdrawal.model.to_string(),
            quantity: withdrawal.quantity,
            date: withdrawal.date,
            reason: withdrawal.reason.to_string(),
            supervisor: withdrawal.supervisor.to_string(),
        }
    }
}
