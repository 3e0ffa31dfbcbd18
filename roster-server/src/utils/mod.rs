//! Utility module - errors, logging, validation, extractors

pub mod error;
pub mod extract;
pub mod logger;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use extract::{PathId, ValidatedJson};
pub use logger::init_logger;
pub use shared::error::{AppError, AppResult, ErrorCode};
