//! Shared types for Roster
//!
//! Wire models for the employee records API and the unified error
//! system used by the server and any Rust client of the API.

pub mod error;
pub mod models;
pub mod serde_helpers;

