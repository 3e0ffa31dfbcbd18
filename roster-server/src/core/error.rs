use thiserror::Error;

/// Errors raised while booting the server (database, migrations, seeding, IO)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for startup code
pub type Result<T> = std::result::Result<T, ServerError>;
