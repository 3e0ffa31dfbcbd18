//! Data models
//!
//! Shared between the server and any client of the API.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY). JSON field names are camelCase.

pub mod address;
pub mod country;
pub mod department;
pub mod employee;

// Re-exports
pub use address::*;
pub use country::*;
pub use department::*;
pub use employee::*;
