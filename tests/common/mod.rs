#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use hospital_gateway::{
    build_app, config::Config, models::field_map::HOSPITAL_FIELDS,
    repository::HospitalRepository, service::HospitalService,
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "AstraCS:test-token";
pub const TEST_ORIGIN: &str = "https://hemo-bank.vercel.app";

pub fn test_config(store_base_url: &str) -> Config {
    Config {
        astra_db_id: "test-db".to_string(),
        astra_region: "us-east1".to_string(),
        astra_keyspace: "bloodbank".to_string(),
        astra_token: TEST_TOKEN.to_string(),
        store_base_url: Some(store_base_url.to_string()),
        store_timeout: Some(Duration::from_secs(5)),
        server_port: 0,
        cors_origin: TEST_ORIGIN.to_string(),
        log_level: "info".to_string(),
    }
}

async fn serve(listener: TcpListener, app: Router) {
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let shutdown = async {
        rx.await.ok();
    };

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .unwrap();
    });

    // Keep the sender alive so the server runs for the whole test
    std::mem::forget(tx);
}

/// Starts the gateway against the given store and returns its address.
pub async fn spawn_gateway(config: Config) -> SocketAddr {
    let repo = HospitalRepository::new(&config).expect("Failed to build store client");
    let app = build_app(HospitalService::new(repo), &config).expect("Failed to build app");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    serve(listener, app).await;
    addr
}

/// In-memory stand-in for the remote table. Updates upsert and only touch the
/// columns sent, and reads return every column with `null` for those never
/// written, the way the hosted store behaves.
#[derive(Clone, Default)]
pub struct FakeStore {
    rows: Arc<Mutex<Vec<Map<String, Value>>>>,
}

impl FakeStore {
    pub fn rows(&self) -> Vec<Map<String, Value>> {
        self.rows.lock().unwrap().clone()
    }

    pub fn seed(&self, row: Value) {
        if let Value::Object(row) = row {
            self.rows.lock().unwrap().push(row);
        }
    }
}

async fn insert_row(
    State(store): State<FakeStore>,
    Json(row): Json<Map<String, Value>>,
) -> (StatusCode, Json<Value>) {
    let id = row.get("id").cloned().unwrap_or(Value::Null);
    store.rows.lock().unwrap().push(row);
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn fetch_rows(
    State(store): State<FakeStore>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if params.get("where").map(String::as_str) != Some("{}") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"description": "where parameter is required", "code": 400})),
        );
    }

    let rows: Vec<Map<String, Value>> = store.rows().into_iter().map(with_all_columns).collect();
    (
        StatusCode::OK,
        Json(json!({ "count": rows.len(), "data": rows })),
    )
}

fn with_all_columns(mut row: Map<String, Value>) -> Map<String, Value> {
    for field in HOSPITAL_FIELDS {
        row.entry(field.storage).or_insert(Value::Null);
    }
    row
}

async fn update_row(
    State(store): State<FakeStore>,
    Path(id): Path<String>,
    Json(patch): Json<Map<String, Value>>,
) -> Json<Value> {
    let mut rows = store.rows.lock().unwrap();
    match rows.iter_mut().find(|r| r.get("id") == Some(&Value::String(id.clone()))) {
        Some(row) => row.extend(patch.clone()),
        None => {
            let mut row = patch.clone();
            row.insert("id".to_string(), Value::String(id));
            rows.push(row);
        }
    }
    Json(json!({ "data": patch }))
}

/// Starts a fake store and returns its handle and base URL.
pub async fn spawn_fake_store() -> (FakeStore, String) {
    let store = FakeStore::default();
    let app = Router::new()
        .route("/hospitals", get(fetch_rows).post(insert_row))
        .route("/hospitals/{id}", put(update_row))
        .with_state(store.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    serve(listener, app).await;
    (store, format!("http://{}", addr))
}
