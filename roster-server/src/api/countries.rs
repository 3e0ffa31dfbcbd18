//! Country API (read-only reference data)

use axum::{Json, Router, extract::State, routing::get};
use shared::models::Country;

use crate::core::AppState;
use crate::db;
use crate::utils::{AppResult, ServiceError};

pub fn router() -> Router<AppState> {
    Router::new().route("/countries", get(list))
}

/// List all countries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Country>>> {
    let mut conn = state.db.pool.acquire().await.map_err(ServiceError::from)?;
    let countries = db::country::find_all(&mut conn)
        .await
        .map_err(ServiceError::from)?;
    Ok(Json(countries))
}
