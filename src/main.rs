use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use task_api::config::{self, AppConfig};
use task_api::http::HttpServer;
use task_api::lifecycle::{self, Shutdown};
use task_api::observability::logging;
use task_api::store::TaskStore;

#[derive(Parser, Debug)]
#[command(name = "task-api", version, about = "Task management HTTP API")]
struct Cli {
    /// Path to a TOML configuration file; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        persist = config.storage.persist,
        data_dir = %config.storage.data_dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let store = if config.storage.persist {
        TaskStore::open(&config.storage.data_dir)?
    } else {
        TaskStore::in_memory()
    };
    let store = Arc::new(store);

    tracing::info!(tasks = store.len(), "Record store ready");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        lifecycle::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(&config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
