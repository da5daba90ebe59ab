use axum::Router;

pub mod dashboard;
pub mod insights;
pub mod inventory;
pub mod system;
pub mod withdrawals;

/// Router for all inventory-facing endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/inventory", inventory::router())
        .nest("/withdrawals", withdrawals::router())
        .nest("/dashboard", dashboard::router())
        .nest("/insights", insights::router())
}
