//! Derived analytics over [`drilltrack_inventory::InventoryState`].
//!
//! Everything in this crate is a pure, total function: no IO, no errors,
//! defined for empty inputs. Views recompute from the state on every call;
//! nothing here is cached or mutated.

pub mod alert;
pub mod stats;
pub mod trend;

pub use alert::{AlertLevel, alert_level};
pub use stats::{critical_items, stock_by_model, total_stock};
pub use trend::{DailyTotal, daily_withdrawal_totals, withdrawals_on, withdrawals_today};
