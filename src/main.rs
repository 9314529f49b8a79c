//! KPIs Service entry point.
//!
//! Intentionally thin: sets up tracing, loads configuration from the
//! environment, and starts the HTTP server. Routes live in `server`,
//! record types in `kpi`.

use clap::Parser;
use kpis_svc::{config::ServiceConfig, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kpis-svc")]
#[command(about = "HTTP service exposing trading KPI endpoints")]
struct Cli {
    /// Listen address override (defaults to BIND_ADDR from the environment)
    #[arg(long)]
    bind: Option<std::net::SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Silent if the file does not exist. Production injects env vars directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env()?;

    let addr = match cli.bind {
        Some(addr) => addr,
        None => config.listen_addr()?,
    };

    tracing::info!(
        app = %config.app_name,
        env = %config.app_env,
        "starting {}",
        server::SERVICE_NAME
    );

    server::serve(&config, addr).await?;

    Ok(())
}
