//! HTTP API
//!
//! All resource routes live under `/api/v1`; `/health` sits at the root.

pub mod countries;
pub mod departments;
pub mod employees;
pub mod health;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Build the application router with middleware and state attached
pub fn create_router(state: AppState) -> Router {
    let v1 = Router::new()
        .merge(countries::router())
        .merge(departments::router())
        .merge(employees::router());

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", v1)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
