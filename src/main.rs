//! JEXL Playground Service
//!
//! An HTTP service built with Tokio and Axum that evaluates JEXL
//! expressions against a JSON context and serves the playground's
//! prebuilt frontend.
//!
//! # Request Flow
//! ```text
//! POST /evaluate ──▶ handlers ──▶ engine (jexl-eval) ──▶ {result, error}
//! GET  /healthz  ──▶ fixed liveness payload
//! GET  /*        ──▶ static asset tree, SPA fallback to index.html
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use jexl_playground::config::{load_config, ServiceConfig};
use jexl_playground::http::HttpServer;
use jexl_playground::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "jexl-playground")]
#[command(about = "HTTP playground for JEXL expression evaluation", long_about = None)]
struct Args {
    /// Path to the TOML configuration file (defaults used when absent).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_tracing(&config.observability);

    tracing::info!("jexl-playground v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        static_files = config.static_files.enabled,
        asset_root = %config.static_files.root.display(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
