use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drilltrack_core::{DomainError, DomainResult, ToolId, WithdrawalId};

use crate::item::ToolItem;
use crate::seed;
use crate::withdrawal::{WithdrawTool, Withdrawal};

/// Aggregate root: the tool catalog plus the withdrawal history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryState {
    /// Catalog in seed order, ids unique.
    pub inventory: Vec<ToolItem>,
    /// Append-only history, newest first.
    pub withdrawals: Vec<Withdrawal>,
}

/// Owned, in-memory inventory store (single writer).
///
/// The store is the only component allowed to mutate [`InventoryState`]:
/// `ToolItem::stock` changes exclusively through [`InventoryStore::withdraw`],
/// and withdrawal records are never mutated or deleted after insertion.
/// Construct one per process (or per test) and pass it by reference.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    state: InventoryState,
}

impl InventoryStore {
    /// Store initialized with the fixed seed catalog and an empty history.
    pub fn seeded() -> Self {
        Self {
            state: InventoryState {
                inventory: seed::initial_inventory(),
                withdrawals: Vec::new(),
            },
        }
    }

    /// Store over an explicit catalog.
    ///
    /// Rejects duplicate ids and negative stock/min_stock up front so the
    /// stock invariant holds for every reachable state.
    pub fn new(inventory: Vec<ToolItem>) -> DomainResult<Self> {
        let mut seen: HashSet<&ToolId> = HashSet::new();
        for item in &inventory {
            if !seen.insert(&item.id) {
                return Err(DomainError::validation(format!(
                    "duplicate tool id: {}",
                    item.id
                )));
            }
            if item.stock < 0 {
                return Err(DomainError::validation(format!(
                    "{}: stock must be >= 0",
                    item.id
                )));
            }
            if item.min_stock < 0 {
                return Err(DomainError::validation(format!(
                    "{}: min_stock must be >= 0",
                    item.id
                )));
            }
        }

        Ok(Self {
            state: InventoryState {
                inventory,
                withdrawals: Vec::new(),
            },
        })
    }

    /// Read-only view of the current state.
    ///
    /// Mutating the returned structure outside this store is a contract
    /// violation; use [`InventoryStore::snapshot`] for an owned copy.
    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Owned copy of the current state, for consumers that outlive the borrow
    /// (e.g. the insight path, which awaits a network round-trip).
    pub fn snapshot(&self) -> InventoryState {
        self.state.clone()
    }

    /// Look up a catalog item by id.
    pub fn get(&self, tool_id: &ToolId) -> Option<&ToolItem> {
        self.state.inventory.iter().find(|i| &i.id == tool_id)
    }

    /// Apply a withdrawal, stamping the current time.
    pub fn withdraw(&mut self, request: WithdrawTool) -> DomainResult<Withdrawal> {
        self.withdraw_at(request, Utc::now())
    }

    /// Apply a withdrawal with an explicit timestamp.
    ///
    /// Check-then-act: on any failure the state is left untouched. On success
    /// exactly one item's stock is decremented and exactly one record is
    /// prepended to the history, together.
    pub fn withdraw_at(
        &mut self,
        request: WithdrawTool,
        now: DateTime<Utc>,
    ) -> DomainResult<Withdrawal> {
        if request.quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let item = self
            .state
            .inventory
            .iter_mut()
            .find(|i| i.id == request.tool_id)
            .ok_or(DomainError::NotFound)?;

        if request.quantity > item.stock {
            return Err(DomainError::insufficient_stock(request.quantity, item.stock));
        }

        item.stock -= request.quantity;

        let withdrawal = Withdrawal {
            id: WithdrawalId::new(),
            tool_id: request.tool_id,
            tool_name: item.name.clone(),
            model: item.model,
            quantity: request.quantity,
            date: now,
            reason: request.reason,
            supervisor: request.supervisor,
        };
        self.state.withdrawals.insert(0, withdrawal.clone());

        Ok(withdrawal)
    }
}
