use std::path::Path;

use crate::core::{Config, Result};
use crate::db::{DbService, seed};
use crate::services::EmployeeService;

/// Application state - holds the explicitly constructed storage client
///
/// Built once in `main` and handed to axum as router state; handlers build
/// their services from it. Cloning is cheap (the pool is reference counted).
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Storage client (SQLite pool)
    pub db: DbService,
}

impl AppState {
    /// Create state from an already connected database
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// Connect, migrate and seed according to `config`
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        let state = Self::new(config.clone(), db);

        if config.seed_reference_data {
            seed::seed_reference_data(&state.db.pool).await?;
        }

        if let Some(path) = &config.seed_employees_file {
            seed::seed_employees(&state.employee_service(), Path::new(path)).await?;
        }

        Ok(state)
    }

    /// Employee service bound to this state's storage client
    pub fn employee_service(&self) -> EmployeeService {
        EmployeeService::new(self.db.clone())
    }
}
