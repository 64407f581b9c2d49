use anyhow::Result;
use iris_serve::{config, logging, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG directives override the configured level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    if let Err(e) = logging::init(&log_filter) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    info!("Starting iris-serve with log filter: {}", log_filter);
    info!("Model path: {}", config.model.path);

    // Startup failures (missing or corrupt model, bind errors) exit non-zero
    server::run(config).await?;

    Ok(())
}
