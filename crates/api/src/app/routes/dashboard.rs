use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};
use chrono::Utc;
use serde::Serialize;

use drilltrack_analytics::{
    DailyTotal, critical_items, daily_withdrawal_totals, stock_by_model, total_stock,
    withdrawals_today,
};
use drilltrack_inventory::ToolModel;

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(get_dashboard))
}

/// The stat cards plus both chart series of the dashboard view.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_stock: i64,
    pub critical_items: Vec<dto::InventoryItemResponse>,
    pub withdrawals_today: i64,
    pub stock_by_model: BTreeMap<ToolModel, i64>,
    pub daily_withdrawals: Vec<DailyTotal>,
}

pub async fn get_dashboard(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let response = services.with_store(|store| {
        let state = store.state();
        DashboardResponse {
            total_stock: total_stock(state),
            critical_items: critical_items(state)
                .into_iter()
                .map(dto::InventoryItemResponse::from_item)
                .collect(),
            withdrawals_today: withdrawals_today(state, Utc::now()),
            stock_by_model: stock_by_model(state),
            daily_withdrawals: daily_withdrawal_totals(state),
        }
    });

    Json(response).into_response()
}
