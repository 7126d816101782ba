use anyhow::Result;
use dotenvy::dotenv;
use showboard::config::Config;
use showboard::telemetry::{self, SERVER_DIRECTIVES};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_result = dotenv();
    telemetry::init_tracing(SERVER_DIRECTIVES);
    match dotenv_result {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);
    showboard::app::run_server(config).await
}
