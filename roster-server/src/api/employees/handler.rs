//! Employee API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::ApiResponse;
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::core::AppState;
use crate::utils::{AppResult, PathId, ServiceError, ValidatedJson};

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("Employee {id}"))
}

/// List all employees
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service().get_all().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employee_service()
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(employee))
}

/// Create a new employee with its address
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state.employee_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Partially update an employee and/or its address
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employee_service()
        .update(id, payload)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(employee))
}

/// Delete an employee (the address goes with it)
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<ApiResponse>> {
    if !state.employee_service().remove(id).await? {
        return Err(not_found(id).into());
    }
    Ok(Json(ApiResponse::ok_with_message("Employee deleted successfully")))
}
