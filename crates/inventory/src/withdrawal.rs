use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drilltrack_core::{DomainError, DomainResult, ToolId, WithdrawalId};

use crate::item::ToolModel;

/// Why stock left the inventory (fixed operational vocabulary).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WithdrawalReason {
    #[serde(rename = "Desgaste Natural")]
    NaturalWear,
    #[serde(rename = "Quebra em Operação")]
    OperationalBreakage,
    #[serde(rename = "Perda de Diâmetro")]
    DiameterLoss,
    #[serde(rename = "Troca de Frente de Lavra")]
    MiningFrontChange,
    #[serde(rename = "Manutenção Preventiva")]
    PreventiveMaintenance,
}

impl WithdrawalReason {
    pub const ALL: [WithdrawalReason; 5] = [
        WithdrawalReason::NaturalWear,
        WithdrawalReason::OperationalBreakage,
        WithdrawalReason::DiameterLoss,
        WithdrawalReason::MiningFrontChange,
        WithdrawalReason::PreventiveMaintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalReason::NaturalWear => "Desgaste Natural",
            WithdrawalReason::OperationalBreakage => "Quebra em Operação",
            WithdrawalReason::DiameterLoss => "Perda de Diâmetro",
            WithdrawalReason::MiningFrontChange => "Troca de Frente de Lavra",
            WithdrawalReason::PreventiveMaintenance => "Manutenção Preventiva",
        }
    }
}

impl core::fmt::Display for WithdrawalReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WithdrawalReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WithdrawalReason::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown withdrawal reason: {s}")))
    }
}

/// Supervisor roster (fixed vocabulary).
pub const SUPERVISORS: [&str; 5] = [
    "Carlos Oliveira",
    "Ana Silva",
    "Marcos Pereira",
    "Juliana Santos",
    "Ricardo Lima",
];

/// Supervisor authorizing a withdrawal.
///
/// Validated against [`SUPERVISORS`]; arbitrary free text is rejected at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Supervisor(String);

impl Supervisor {
    pub fn parse(name: &str) -> DomainResult<Self> {
        SUPERVISORS
            .iter()
            .find(|s| **s == name)
            .map(|s| Self((*s).to_string()))
            .ok_or_else(|| DomainError::validation(format!("unknown supervisor: {name}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Supervisor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Supervisor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Supervisor::parse(s)
    }
}

impl<'de> Deserialize<'de> for Supervisor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Supervisor::parse(&name).map_err(serde::de::Error::custom)
    }
}

/// Immutable record of stock leaving inventory.
///
/// `tool_name` and `model` are denormalized snapshots taken at withdrawal
/// time, so the history stays accurate even if the catalog entry is renamed
/// later. `tool_id` is a weak reference into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: WithdrawalId,
    pub tool_id: ToolId,
    pub tool_name: String,
    pub model: ToolModel,
    pub quantity: i64,
    /// Assigned by the store at insertion time, never client-supplied.
    pub date: DateTime<Utc>,
    pub reason: WithdrawalReason,
    pub supervisor: Supervisor,
}

/// Request to apply a withdrawal against the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WithdrawTool {
    pub tool_id: ToolId,
    pub quantity: i64,
    pub reason: WithdrawalReason,
    pub supervisor: Supervisor,
}
