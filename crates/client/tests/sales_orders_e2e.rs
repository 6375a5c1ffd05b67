//! End-to-end checks against an in-process mock backend.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pulse_client::{
    ApiClient, ClientConfig, FetchState, ListEndpoint, Resource, SalesOrders, SalesStatsEndpoint,
};
use pulse_shared::{PurchaseOrder, SalesOrderFilters, TargetOrder};
use serde_json::{json, Value};

type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

async fn sales_orders(
    State(seen): State<Seen>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    seen.lock().unwrap().push(params.clone());
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let orders: Vec<Value> = (0..5)
        .map(|i| {
            json!({
                "_id": format!("{page}-{i}"),
                "katana_order_number": format!("SO-{page}-{i}"),
                "status": "pending",
                "katana_order_data": {"currency": "USD", "total": 10.5},
            })
        })
        .collect();
    Json(json!({
        "status": "success",
        "data": orders,
        "pagination": {
            "current_page": page,
            "total_pages": 4,
            "total_count": 80,
            "has_next": page < 4,
            "has_prev": page > 1,
            "next_cursor": format!("after-{page}"),
        },
        "filters_applied": {},
    }))
}

async fn purchase_orders() -> Json<Value> {
    Json(json!({"status": "error", "message": "Katana sync in progress"}))
}

async fn sales_stats() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "error", "message": "Database connection failed"})),
    )
}

async fn target_orders() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(json!({"status": "success", "data": []}))
}

async fn spawn_backend() -> (SocketAddr, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/api/sales-orders", get(sales_orders))
        .route("/api/purchase-orders", get(purchase_orders))
        .route("/api/sales-stats", get(sales_stats))
        .route("/api/target-orders", get(target_orders))
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, seen)
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let config = ClientConfig::default().with_api_base_url(format!("http://{addr}"));
    ApiClient::from_config(&config)
}

#[tokio::test]
async fn first_page_exposes_orders_and_has_next() {
    let (addr, seen) = spawn_backend().await;
    let orders = SalesOrders::new(client_for(addr), SalesOrderFilters::first_page(20));

    let state = orders.load().await;

    let page = state.data().expect("sales orders should load");
    assert_eq!(page.orders.len(), 5);
    assert_eq!(page.orders[0].display_currency(), "USD");
    assert!(page.pagination.as_ref().unwrap().has_next);
    assert!(orders.snapshot().last_updated.is_some());

    let params = seen.lock().unwrap()[0].clone();
    assert_eq!(params.get("page").map(String::as_str), Some("1"));
    assert_eq!(params.get("limit").map(String::as_str), Some("20"));
    assert_eq!(params.len(), 2);
}

#[tokio::test]
async fn forward_navigation_sends_cursor() {
    let (addr, seen) = spawn_backend().await;
    let orders = SalesOrders::new(client_for(addr), SalesOrderFilters::first_page(20));

    orders.load().await;
    orders.next_page().await;
    orders.prev_page().await;

    let seen = seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[1].get("page").map(String::as_str), Some("2"));
    assert_eq!(seen[1].get("cursor").map(String::as_str), Some("after-1"));
    assert_eq!(seen[2].get("page").map(String::as_str), Some("1"));
    assert!(!seen[2].contains_key("cursor"));
}

#[tokio::test]
async fn filter_values_reach_the_backend() {
    let (addr, seen) = spawn_backend().await;
    let orders = SalesOrders::new(client_for(addr), SalesOrderFilters::first_page(20));

    orders.go_to_page(3).await;
    let patch = SalesOrderFilters {
        order_number: Some("SO 1001".into()),
        status: Some("pending".into()),
        dcl_status: Some(String::new()),
        ..Default::default()
    };
    orders.refetch(Some(patch)).await;

    let params = seen.lock().unwrap().last().cloned().unwrap();
    assert_eq!(params.get("page").map(String::as_str), Some("1"));
    assert_eq!(params.get("order_number").map(String::as_str), Some("SO 1001"));
    assert_eq!(params.get("status").map(String::as_str), Some("pending"));
    assert!(!params.contains_key("dcl_status"));
}

#[tokio::test]
async fn error_envelope_with_ok_status_is_an_error() {
    let (addr, _) = spawn_backend().await;
    let resource = Resource::new(client_for(addr), ListEndpoint::<PurchaseOrder>::purchase_orders());

    let state = resource.refetch().await;
    assert_eq!(state, FetchState::Error("Katana sync in progress".to_string()));
}

#[tokio::test]
async fn server_error_surfaces_status_and_message() {
    let (addr, _) = spawn_backend().await;
    let resource = Resource::new(client_for(addr), SalesStatsEndpoint);

    let state = resource.refetch().await;
    let message = state.error().unwrap();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("Database connection failed"), "{message}");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let (addr, _) = spawn_backend().await;
    let client = client_for(addr).with_timeout(Duration::from_millis(200));
    let resource = Resource::new(client, ListEndpoint::<TargetOrder>::target_orders());

    let state = resource.refetch().await;
    assert!(state.error().unwrap().contains("timed out"));
    assert!(!resource.is_in_flight());
}
