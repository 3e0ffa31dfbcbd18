//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use roster_server::core::{AppState, Config};
use roster_server::db::{DbService, seed};
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DbService,
}

impl TestApp {
    /// Router over a fresh in-memory database with reference data seeded
    pub async fn new() -> Self {
        let db = DbService::in_memory().await.unwrap();
        seed::seed_reference_data(&db.pool).await.unwrap();
        let state = AppState::new(Config::in_memory(), db.clone());
        Self {
            router: roster_server::api::create_router(state),
            db,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.db.pool)
            .await
            .unwrap()
    }
}

/// The John Doe create payload
pub fn john_doe() -> Value {
    json!({
        "firstName": "John",
        "lastName": "Doe",
        "phone": "123-456-7890",
        "hireDate": "2025-02-01",
        "departmentId": 1,
        "address": {
            "streetName": "Evergreen Terrace",
            "streetNumber1": "742",
            "state": "Illinois",
            "city": "Springfield",
            "postcode": "12345",
            "countryId": 1
        }
    })
}
