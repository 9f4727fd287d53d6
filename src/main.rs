// ABOUTME: Entry point for the greeter binary.
// ABOUTME: Parses CLI arguments, initializes tracing, wires the service, and serves until ctrl-c.

mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use greeter_core::{CharReverser, Reverser};
use greeter_server::{GreeterConfig, GreetingService};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "greeter=info,greeter_server=info,tower_http=debug",
                )
            }),
        )
        .init();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %format!("{:#}", e), "greeter failed");
        return Err(e);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let mut config = GreeterConfig::from_env()?;
    cli.apply(&mut config);
    tracing::info!(
        listener = %config.listener.name,
        address = %config.listener.address(),
        reverse = config.options.reverse,
        healthz = config.options.healthz,
        "greeter starting up"
    );

    let reverser: Option<Arc<dyn Reverser>> = if config.options.reverse {
        Some(Arc::new(CharReverser))
    } else {
        None
    };

    let service = GreetingService::new(config.options, reverser)?;
    let bound = service.bind(&config.listener).await?;

    bound
        .serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("failed to listen for ctrl-c: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("shutdown signal received");
        })
        .await?;
    Ok(())
}
