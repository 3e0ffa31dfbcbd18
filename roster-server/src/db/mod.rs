//! Database Module
//!
//! Handles the SQLite connection pool, migrations and the per-entity
//! persistence primitives. Every primitive takes a `&mut SqliteConnection`
//! so the services can run it on a pooled connection or inside a
//! transaction.

pub mod address;
pub mod country;
pub mod department;
pub mod employee;
pub mod seed;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::core::Result;

/// Database service - owns a SQLite connection pool
#[derive(Clone, Debug)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (creating if missing) the database at `url` and apply migrations
    pub async fn new(url: &str, max_connections: u32) -> Result<Self> {
        let mut options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .pragma("foreign_keys", "ON")
            .busy_timeout(Duration::from_secs(5));

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        if !in_memory {
            options = options
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal);
        }

        // A private in-memory database only lives as long as its connection,
        // so the pool must never drop or recycle it.
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::info!(in_memory, "Database connection established (busy_timeout=5000ms)");

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }

    /// Fresh, migrated in-memory database
    pub async fn in_memory() -> Result<Self> {
        Self::new("sqlite::memory:", 1).await
    }
}
