mod cli;

use crate::cli::{LogFormat, CLI};
use clap::Parser;
use enhancer_gateway::{App, AppState};
use enhancer_generator::RandomGenerator;
use enhancer_shortener::{AllocationSettings, ShortenerService};
use enhancer_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CLI::parse();

    init_tracing(config.log_format);

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        key_length = config.key_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    let generator = RandomGenerator::new(config.key_length)?;
    let settings = AllocationSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let service = ShortenerService::with_settings(InMemoryRepository::new(), generator, settings);
    let state = AppState::new(Arc::new(service), &config.public_base_url);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
