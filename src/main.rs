//! HTTP server for the salon revenue forecast engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use salon_forecast::api::{AppState, create_router};
use salon_forecast::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "salon-forecast", version, about = "Monthly salon revenue forecasts")]
struct Cli {
    /// Directory holding settings.yaml and sales_standards.yaml.
    #[arg(long, default_value = "./config/salon")]
    config: PathBuf,
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salon_forecast=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ConfigLoader::load(&cli.config)?;
    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Forecast server listening");
    axum::serve(listener, router).await?;
    Ok(())
}
