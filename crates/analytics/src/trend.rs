use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use drilltrack_inventory::InventoryState;

/// Days of history kept in the withdrawal trend.
const TREND_DAYS: usize = 7;

/// Units withdrawn on one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub total: i64,
}

/// Units withdrawn on the given calendar day (UTC).
pub fn withdrawals_on(state: &InventoryState, day: NaiveDate) -> i64 {
    state
        .withdrawals
        .iter()
        .filter(|w| w.date.date_naive() == day)
        .map(|w| w.quantity)
        .sum()
}

/// Units withdrawn on the same calendar day as `now`.
pub fn withdrawals_today(state: &InventoryState, now: DateTime<Utc>) -> i64 {
    withdrawals_on(state, now.date_naive())
}

/// Withdrawal totals per calendar day, limited to the most recent
/// [`TREND_DAYS`] distinct days present in the data, ascending.
///
/// Days without withdrawals are not synthesized as zero entries; gaps are
/// simply absent.
pub fn daily_withdrawal_totals(state: &InventoryState) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for w in &state.withdrawals {
        *by_day.entry(w.date.date_naive()).or_insert(0) += w.quantity;
    }

    let skip = by_day.len().saturating_sub(TREND_DAYS);
    by_day
        .into_iter()
        .skip(skip)
        .map(|(day, total)| DailyTotal { day, total })
        .collect()
}
