//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use jexl_playground::config::ServiceConfig;
use jexl_playground::http::HttpServer;

/// Start the service on an ephemeral port, returning its address.
pub async fn start_service(config: ServiceConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Config for the API-only deployment variant.
#[allow(dead_code)]
pub fn api_only_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.static_files.enabled = false;
    config
}

/// A client that never picks up proxy settings from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
