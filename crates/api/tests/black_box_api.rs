use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use drilltrack_api::app::{build_app_with, services::AppServices};
use drilltrack_insights::{InsightClient, InsightError, SERVICE_UNAVAILABLE_MESSAGE};
use drilltrack_inventory::InventoryStore;

/// Insight client scripted with a fixed reply.
struct StaticInsightClient(&'static str);

#[async_trait]
impl InsightClient for StaticInsightClient {
    async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        Ok(self.0.to_string())
    }
}

/// Insight client that always fails, as if the service were unreachable.
struct UnreachableInsightClient;

#[async_trait]
impl InsightClient for UnreachableInsightClient {
    async fn generate(&self, _prompt: &str) -> Result<String, InsightError> {
        Err(InsightError::Service("connection refused".to_string()))
    }
}

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(client: Box<dyn InsightClient>) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = build_app_with(AppServices::new(InventoryStore::seeded(), client));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;

    let response = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn seeded_inventory_is_listed_in_catalog_order() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;

    let items: serde_json::Value = reqwest::get(format!("{}/inventory", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 11);
    assert_eq!(items[0]["id"], "t51-p");
    assert_eq!(items[0]["category"], "Punho");
    assert_eq!(items[0]["status"], "ok");
}

#[tokio::test]
async fn model_filter_limits_the_listing() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;

    let items: serde_json::Value =
        reqwest::get(format!("{}/inventory?model=T50", server.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    assert_eq!(items.as_array().unwrap().len(), 3);

    let bad = reqwest::get(format!("{}/inventory?model=T99", server.base_url))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn withdrawal_round_trip_updates_stock_history_and_dashboard() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{}/withdrawals", server.base_url))
        .json(&json!({
            "tool_id": "t51-b35",
            "quantity": 5,
            "reason": "Desgaste Natural",
            "supervisor": "Ana Silva",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::CREATED);

    let withdrawal: serde_json::Value = created.json().await.unwrap();
    assert_eq!(withdrawal["tool_id"], "t51-b35");
    assert_eq!(withdrawal["tool_name"], "Bit 3,5'' T51");
    assert_eq!(withdrawal["model"], "T51");
    assert_eq!(withdrawal["quantity"], 5);
    assert_eq!(withdrawal["supervisor"], "Ana Silva");

    let item: serde_json::Value =
        reqwest::get(format!("{}/inventory/t51-b35", server.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    assert_eq!(item["stock"], 35);

    let history: serde_json::Value = reqwest::get(format!("{}/withdrawals", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], withdrawal["id"]);

    let dashboard: serde_json::Value = reqwest::get(format!("{}/dashboard", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard["total_stock"], 303);
    assert_eq!(dashboard["withdrawals_today"], 5);
    assert_eq!(dashboard["daily_withdrawals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn overdraw_is_rejected_without_mutation() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;
    let client = reqwest::Client::new();

    let rejected = client
        .post(format!("{}/withdrawals", server.base_url))
        .json(&json!({
            "tool_id": "t51-b35",
            "quantity": 1000,
            "reason": "Quebra em Operação",
            "supervisor": "Carlos Oliveira",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = rejected.json().await.unwrap();
    assert_eq!(body["error"], "insufficient_stock");

    let item: serde_json::Value =
        reqwest::get(format!("{}/inventory/t51-b35", server.base_url))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
    assert_eq!(item["stock"], 40);

    let history: serde_json::Value = reqwest::get(format!("{}/withdrawals", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_tool_and_vocabulary_violations_are_rejected() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;
    let client = reqwest::Client::new();

    let unknown_tool = client
        .post(format!("{}/withdrawals", server.base_url))
        .json(&json!({
            "tool_id": "t99-x",
            "quantity": 1,
            "reason": "Desgaste Natural",
            "supervisor": "Ana Silva",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_tool.status(), StatusCode::NOT_FOUND);

    let unknown_supervisor = client
        .post(format!("{}/withdrawals", server.base_url))
        .json(&json!({
            "tool_id": "t51-p",
            "quantity": 1,
            "reason": "Desgaste Natural",
            "supervisor": "Fulano de Tal",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown_supervisor.status(), StatusCode::BAD_REQUEST);

    let missing_item = reqwest::get(format!("{}/inventory/t99-x", server.base_url))
        .await
        .unwrap();
    assert_eq!(missing_item.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_reports_the_seeded_catalog() {
    let server = TestServer::spawn(Box::new(StaticInsightClient("ok"))).await;

    let dashboard: serde_json::Value = reqwest::get(format!("{}/dashboard", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(dashboard["total_stock"], 308);
    assert_eq!(dashboard["critical_items"].as_array().unwrap().len(), 0);
    assert_eq!(dashboard["withdrawals_today"], 0);
    assert_eq!(dashboard["stock_by_model"]["T45"], 131);
    assert_eq!(dashboard["stock_by_model"]["T50"], 62);
    assert_eq!(dashboard["stock_by_model"]["T51"], 115);
    assert!(dashboard["daily_withdrawals"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn insights_return_the_generated_analysis() {
    let server =
        TestServer::spawn(Box::new(StaticInsightClient("Estoque saudável no momento."))).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/insights", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["analysis"], "Estoque saudável no momento.");
}

#[tokio::test]
async fn insights_fall_back_when_the_service_is_unreachable() {
    let server = TestServer::spawn(Box::new(UnreachableInsightClient)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/insights", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["analysis"], SERVICE_UNAVAILABLE_MESSAGE);

    // The failed call must not have touched the store.
    let dashboard: serde_json::Value = reqwest::get(format!("{}/dashboard", server.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(dashboard["total_stock"], 308);
}
