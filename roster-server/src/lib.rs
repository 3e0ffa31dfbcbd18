//! Roster Server
//!
//! Employee records REST backend: employees with their address, plus the
//! department and country reference data, stored in SQLite.
//!
//! # Modules
//!
//! - [`core`] - configuration, state, server, startup errors
//! - [`db`] - connection pool, migrations, persistence primitives, seeding
//! - [`services`] - reference resolver and the employee aggregate service
//! - [`api`] - axum routes and handlers
//! - [`utils`] - service errors, validation, logging

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

pub use crate::core::{AppState, Config, Server, ServerError};
pub use crate::db::DbService;
pub use crate::services::EmployeeService;
