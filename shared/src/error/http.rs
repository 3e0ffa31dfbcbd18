//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// HTTP status for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            // primary entity only; a missing reference is the client's fault
            Self::EmployeeNotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::DepartmentNotFound
            | Self::CountryNotFound => StatusCode::BAD_REQUEST,
        }
    }
}
