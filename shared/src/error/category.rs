//! Error category classification

use super::codes::ErrorCode;

/// Error category derived from the code range
///
/// - 0xxx: General errors
/// - 80xx: Employee errors
/// - 85xx: Reference data errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    General,
    Employee,
    Reference,
    /// Logged when rendered; never shown in detail to clients
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            8000..8500 => Self::Employee,
            8500..9000 => Self::Reference,
            9000.. => Self::System,
            _ => Self::General,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
