use std::sync::RwLock;

use drilltrack_core::DomainResult;
use drilltrack_insights::{GeminiClient, InsightClient, InsightRequester};
use drilltrack_inventory::{InventoryState, InventoryStore, WithdrawTool, Withdrawal};

/// Shared application services: the owned store plus the insight requester.
///
/// Single-writer model: handlers hold the store lock only for the duration of
/// a synchronous read or mutation. The insight path clones a snapshot and
/// releases the lock before awaiting the network round-trip, so the store is
/// never held across a suspension point.
pub struct AppServices {
    store: RwLock<InventoryStore>,
    requester: InsightRequester<Box<dyn InsightClient>>,
}

impl AppServices {
    /// Production wiring: seed catalog + Gemini client.
    pub fn seeded() -> Self {
        Self::new(InventoryStore::seeded(), Box::new(GeminiClient::new()))
    }

    pub fn new(store: InventoryStore, client: Box<dyn InsightClient>) -> Self {
        Self {
            store: RwLock::new(store),
            requester: InsightRequester::new(client),
        }
    }

    /// Run a read-only closure against the store.
    pub fn with_store<R>(&self, f: impl FnOnce(&InventoryStore) -> R) -> R {
        f(&self.store.read().unwrap())
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> InventoryState {
        self.store.read().unwrap().snapshot()
    }

    /// Apply a withdrawal against the store.
    pub fn withdraw(&self, request: WithdrawTool) -> DomainResult<Withdrawal> {
        self.store.write().unwrap().withdraw(request)
    }

    /// Snapshot the store and request an analysis; the lock is released
    /// before the await.
    pub async fn analyze(&self) -> String {
        let snapshot = self.snapshot();
        self.requester.analyze(&snapshot).await
    }
}
