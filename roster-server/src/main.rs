use roster_server::core::{AppState, Config, Server};
use roster_server::utils::init_logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());

    tracing::info!(
        database = %config.database_url,
        environment = %config.environment,
        "Starting roster server"
    );

    let state = AppState::initialize(&config).await.inspect_err(|e| {
        tracing::error!("Startup failed: {e}");
    })?;

    Server::new(state).run().await?;
    Ok(())
}
