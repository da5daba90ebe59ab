use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::post};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(generate_insights))
}

/// Run the AI stock analysis over a snapshot of the current state.
///
/// Always 200: the requester absorbs service failures into fixed fallback
/// text, and the store is untouched while the call is in flight.
pub async fn generate_insights(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let analysis = services.analyze().await;

    Json(serde_json::json!({ "analysis": analysis })).into_response()
}
