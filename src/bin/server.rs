//! Text Insights Server Binary

use anyhow::Result;

use text_insights::config::AppConfig;
use text_insights::logging::init_logging;
use text_insights::server;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = AppConfig::load_or_default(&config_path)?;
    init_logging(config.to_log_config())?;

    tracing::info!("Starting text insights server");
    server::serve(config).await?;

    Ok(())
}
