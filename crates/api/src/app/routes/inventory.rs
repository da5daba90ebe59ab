use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use drilltrack_inventory::ToolModel;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_inventory))
        .route("/:id", get(get_item))
}

#[derive(Debug, Deserialize)]
pub struct InventoryFilter {
    /// Optional model filter; absent means all models.
    pub model: Option<String>,
}

pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Query(filter): Query<InventoryFilter>,
) -> axum::response::Response {
    let model = match filter.model.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<ToolModel>() {
            Ok(model) => Some(model),
            Err(e) => return errors::domain_error_to_response(e),
        },
    };

    let items: Vec<dto::InventoryItemResponse> = services.with_store(|store| {
        store
            .state()
            .inventory
            .iter()
            .filter(|item| model.is_none_or(|m| item.model == m))
            .map(dto::InventoryItemResponse::from_item)
            .collect()
    });

    Json(items).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let item = services.with_store(|store| {
        store
            .get(&drilltrack_core::ToolId::new(id.clone()))
            .map(dto::InventoryItemResponse::from_item)
    });

    match item {
        Some(item) => Json(item).into_response(),
        None => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("unknown tool id: {id}"),
        ),
    }
}
