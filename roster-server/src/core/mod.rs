//! Core module - configuration, state, server and startup errors
//!
//! - [`Config`] - server configuration
//! - [`AppState`] - shared state injected into handlers
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::AppState;
