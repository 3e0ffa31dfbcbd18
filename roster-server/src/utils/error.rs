//! Service-layer error type
//!
//! `ServiceError` bridges storage errors (`sqlx::Error`) and the API-layer
//! error (`AppError`) so services can use `?` freely while handlers still
//! return the unified `ApiResponse` body.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::services::reference::Reference;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Primary entity missing
    #[error("{0} not found")]
    NotFound(String),

    /// A foreign key in the payload points at nothing
    #[error("{reference} {id} not found")]
    ReferenceNotFound { reference: Reference, id: i64 },

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(resource) => {
                AppError::with_message(ErrorCode::EmployeeNotFound, format!("{resource} not found"))
            }
            ServiceError::ReferenceNotFound { reference, id } => {
                let code = match reference {
                    Reference::Department => ErrorCode::DepartmentNotFound,
                    Reference::Country => ErrorCode::CountryNotFound,
                };
                AppError::with_message(code, format!("{reference} {id} not found"))
                    .with_detail(reference.field(), id)
            }
            ServiceError::Validation(msg) => AppError::validation(msg),
            ServiceError::Database(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
