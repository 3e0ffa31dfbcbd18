/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATABASE_URL | sqlite:roster.db | SQLite connection URL |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log filter when RUST_LOG is unset |
/// | LOG_DIR | - | Directory for daily rolling log files |
/// | DB_MAX_CONNECTIONS | 5 | Connection pool size |
/// | SEED_REFERENCE_DATA | true | Seed departments and countries at startup |
/// | SEED_EMPLOYEES_FILE | - | JSON file of demo employees to create on an empty store |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/roster.db HTTP_PORT=8080 cargo run -p roster-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx SQLite URL
    pub database_url: String,
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Default tracing filter
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Seed departments and countries at startup
    pub seed_reference_data: bool,
    /// Optional demo employee fixture
    pub seed_employees_file: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:roster.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            seed_reference_data: std::env::var("SEED_REFERENCE_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            seed_employees_file: std::env::var("SEED_EMPLOYEES_FILE")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    /// Configuration backed by a private in-memory database, used by tests
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            seed_employees_file: None,
            ..Self::from_env()
        }
    }

    /// Socket address string for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_overrides() {
        let config = Config::in_memory();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.db_max_connections, 1);
        assert!(config.seed_employees_file.is_none());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config {
            http_host: "127.0.0.1".into(),
            http_port: 8080,
            ..Config::in_memory()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
