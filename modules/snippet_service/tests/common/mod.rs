//! Shared fixtures: an in-memory repository, a SQLite-backed router and
//! request helpers

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use snippet_service::contract::*;
use snippet_service::domain::{EntityRepository, EntityService, SortOrder};
use snippet_service::{Config, SnippetServiceModule};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower::ServiceExt;

pub const DEFAULT_CODE: &str = "AAAAAAAAAA";
pub const UPDATED_CODE: &str = "BBBBBBBBBB";
pub const DEFAULT_NAME: &str = "AAAAAAAAAA";
pub const UPDATED_NAME: &str = "BBBBBBBBBB";

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn default_cts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

// ===== In-memory repository =====

/// BTreeMap-backed repository; listing is always ascending by id
#[derive(Clone)]
pub struct MockRepo<R: Record> {
    data: Arc<RwLock<BTreeMap<EntityId, R>>>,
    next_id: Arc<RwLock<EntityId>>,
    assign_id: fn(&mut R, EntityId),
}

impl<R: Record> MockRepo<R> {
    pub fn new(assign_id: fn(&mut R, EntityId)) -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            assign_id,
        }
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }

    pub fn get(&self, id: EntityId) -> Option<R> {
        self.data.read().get(&id).cloned()
    }

    /// Print verbose information about repository state
    pub fn print_state(&self, context: &str) {
        let data = self.data.read();
        println!("\n========== {} Repository State: {} ==========", R::KIND, context);
        println!("Total records: {}", data.len());
        if data.is_empty() {
            println!("  (empty)");
        }
        for (id, record) in data.iter() {
            println!("  {}: {:?}", id, record);
        }
        println!("====================================================\n");
    }
}

#[async_trait]
impl<R: Record> EntityRepository<R> for MockRepo<R> {
    async fn save(&self, record: &R) -> anyhow::Result<R> {
        let mut record = record.clone();
        let id = match record.id() {
            Some(id) => id,
            None => {
                let mut next = self.next_id.write();
                let id = *next;
                *next += 1;
                (self.assign_id)(&mut record, id);
                id
            }
        };
        self.data.write().insert(id, record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: EntityId) -> anyhow::Result<Option<R>> {
        Ok(self.data.read().get(&id).cloned())
    }

    async fn find_all(&self, _sort: Option<&SortOrder>) -> anyhow::Result<Vec<R>> {
        Ok(self.data.read().values().cloned().collect())
    }

    async fn exists_by_id(&self, id: EntityId) -> anyhow::Result<bool> {
        Ok(self.data.read().contains_key(&id))
    }

    async fn delete_by_id(&self, id: EntityId) -> anyhow::Result<bool> {
        Ok(self.data.write().remove(&id).is_some())
    }
}

/// Repository whose every call fails, for store-failure paths
pub struct FailingRepo;

#[async_trait]
impl<R: Record> EntityRepository<R> for FailingRepo {
    async fn save(&self, _record: &R) -> anyhow::Result<R> {
        anyhow::bail!("connection refused")
    }

    async fn find_by_id(&self, _id: EntityId) -> anyhow::Result<Option<R>> {
        anyhow::bail!("connection refused")
    }

    async fn find_all(&self, _sort: Option<&SortOrder>) -> anyhow::Result<Vec<R>> {
        anyhow::bail!("connection refused")
    }

    async fn exists_by_id(&self, _id: EntityId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }

    async fn delete_by_id(&self, _id: EntityId) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }
}

pub fn service_over<R: Record>(repo: &MockRepo<R>) -> EntityService<R> {
    EntityService::new(Arc::new(repo.clone()))
}

pub fn vendor_repo() -> MockRepo<Vendor> {
    MockRepo::new(|v, id| v.id = Some(id))
}

pub fn section_repo() -> MockRepo<SnippetSection> {
    MockRepo::new(|s, id| s.id = Some(id))
}

pub fn new_vendor() -> Vendor {
    Vendor {
        id: None,
        code: DEFAULT_CODE.to_string(),
        name: DEFAULT_NAME.to_string(),
        is_active: false,
    }
}

pub fn new_section(snippet_id: Option<EntityId>, order_position: i32) -> SnippetSection {
    SnippetSection {
        id: None,
        lang_type: Some("rust".to_string()),
        title: "Intro".to_string(),
        description: None,
        text: "fn main() {}".to_string(),
        cts: default_cts(),
        order_position,
        status: true,
        snippet_id,
    }
}

// ===== SQLite-backed application =====

/// Fresh in-memory database with the schema applied
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");
    SnippetServiceModule::migrate(&db)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub async fn sqlite_app() -> Router {
    sqlite_app_with(Config::default()).await
}

pub async fn sqlite_app_with(config: Config) -> Router {
    let module = SnippetServiceModule::default();
    module
        .init(config, sqlite_db().await)
        .expect("Failed to init module");
    module
        .register_rest(Router::new())
        .expect("Failed to register routes")
}

// ===== Request helpers =====

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn id(&self) -> EntityId {
        self.body["id"].as_i64().expect("response has no id")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let content_type = if method == Method::PATCH {
        "application/merge-patch+json"
    } else {
        "application/json"
    };
    send_as(app, method, uri, content_type, body).await
}

pub async fn send_as(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: Option<Value>,
) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
