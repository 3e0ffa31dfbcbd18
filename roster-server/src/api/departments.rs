//! Department API (read-only reference data)

use axum::{Json, Router, extract::State, routing::get};
use shared::models::Department;

use crate::core::AppState;
use crate::db;
use crate::utils::{AppResult, ServiceError};

pub fn router() -> Router<AppState> {
    Router::new().route("/departments", get(list))
}

/// List all departments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let mut conn = state.db.pool.acquire().await.map_err(ServiceError::from)?;
    let departments = db::department::find_all(&mut conn)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(departments))
}
