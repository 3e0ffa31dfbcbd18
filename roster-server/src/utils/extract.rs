//! Extractors that reject with the unified `ApiResponse` body

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::AppError;
use shared::models::{EmployeeCreate, EmployeeUpdate};

use crate::utils::validation::{
    CREATE_EMPLOYEE_RULES, FieldRule, UPDATE_EMPLOYEE_RULES, normalize_integers, validate,
};

/// Payload types that carry a validation rule table
pub trait ValidationSchema {
    const RULES: &'static [FieldRule];
}

impl ValidationSchema for EmployeeCreate {
    const RULES: &'static [FieldRule] = CREATE_EMPLOYEE_RULES;
}

impl ValidationSchema for EmployeeUpdate {
    const RULES: &'static [FieldRule] = UPDATE_EMPLOYEE_RULES;
}

/// JSON body checked against `T::RULES` before deserializing into `T`
///
/// Malformed JSON is rejected as `InvalidRequest`; rule violations are
/// rejected as `ValidationFailed` with every message under `details.errors`.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidationSchema,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;

        let errors = validate(T::RULES, &value);
        if !errors.is_empty() {
            tracing::debug!(?errors, "Request payload rejected");
            return Err(AppError::validation_errors(errors));
        }

        normalize_integers(T::RULES, &mut value);

        let data = serde_json::from_value(value).map_err(|e| AppError::validation(e.to_string()))?;
        Ok(Self(data))
    }
}

/// Numeric `{id}` path segment
///
/// A non-numeric id is rejected as `InvalidRequest`.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_request(rejection.body_text()))?;
        Ok(Self(id))
    }
}
