//! Unified error codes for Roster
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 80xx: Employee errors
//! - 85xx: Reference data errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the browser client can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Payload failed the field rules
    ValidationFailed = 2,
    /// Body or path could not be parsed
    InvalidRequest = 5,

    // ==================== 80xx: Employee ====================
    EmployeeNotFound = 8001,

    // ==================== 85xx: Reference data ====================
    /// Referenced department does not exist
    DepartmentNotFound = 8501,
    /// Referenced country does not exist
    CountryNotFound = 8502,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::CountryNotFound => "Country not found",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
