use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", get(list_withdrawals).post(create_withdrawal))
}

pub async fn list_withdrawals(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let withdrawals: Vec<dto::WithdrawalResponse> = services.with_store(|store| {
        store
            .state()
            .withdrawals
            .iter()
            .map(dto::WithdrawalResponse::from_withdrawal)
            .collect()
    });

    Json(withdrawals).into_response()
}

pub async fn create_withdrawal(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateWithdrawalRequest>,
) -> axum::response::Response {
    let request = match body.into_domain() {
        Ok(request) => request,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.withdraw(request) {
        Ok(withdrawal) => {
            tracing::info!(
                tool_id = %withdrawal.tool_id,
                quantity = withdrawal.quantity,
                "withdrawal recorded"
            );
            (
                StatusCode::CREATED,
                Json(dto::WithdrawalResponse::from_withdrawal(&withdrawal)),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
