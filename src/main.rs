//! To-Do List Server
//!
//! A small HTTP server that persists a single user's task list as JSON
//! on local disk and serves a browser UI for it.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Arc;
use todo_server::api;
use todo_server::cli::Cli;
use todo_server::config::Config;
use todo_server::store::{JsonFileStore, TaskStore};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    // Override settings from CLI arguments
    if let Some(store) = &cli.store {
        config.server.store_path = store.into();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    run_server(config).await
}

/// Run the HTTP server until interrupted.
async fn run_server(config: Config) -> Result<()> {
    config.ensure_store_dir()?;

    info!("Starting to-do server v{}", env!("CARGO_PKG_VERSION"));
    info!("Store: {:?}", config.server.store_path);

    let store: Arc<dyn TaskStore> =
        Arc::new(JsonFileStore::new(config.server.store_path.clone()));

    let (shutdown_tx, addr) = api::start_server(store, config.server.port).await?;
    info!("To-do list available at http://{}", addr);

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    let _ = shutdown_tx.send(());

    Ok(())
}
