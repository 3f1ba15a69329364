//! ovh-gateway: list registered services at startup.

use std::path::PathBuf;

use clap::Parser;
use ovh_gateway::{config, Application, CheckerModule, DiscoveryModule};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "ovh-gateway")]
#[command(about = "Print the services known to discovery at startup")]
struct Cli {
    /// Config file (TOML or JSON). Defaults to $OVH_GATEWAY_CONFIG, then config/gateway.toml.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Extra service name for static discovery; repeatable.
    #[arg(long = "service", value_name = "NAME")]
    services: Vec<String>,
    /// Exit once startup checks have settled instead of waiting for Ctrl+C.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // stdout is reserved for the service line.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = config::load(cli.config.as_deref())?.config;
    config.discovery.services.extend(cli.services);

    let mut app = Application::new();
    app.register(&mut DiscoveryModule::new().static_services(config.discovery.services))?;
    if config.checker.enabled {
        app.register(&mut CheckerModule::new())?;
    }
    let startup = app.start()?;
    info!("ovh-gateway started");

    if cli.once {
        startup.wait_all().await;
        return Ok(());
    }
    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received");
    Ok(())
}
