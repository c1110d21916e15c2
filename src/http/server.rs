//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID)
//! - Bind server to listener
//! - Select the deployment variant (API-only vs SPA) from config

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::engine::JexlEngine;
use crate::http::handlers;
use crate::http::statics::StaticFiles;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<JexlEngine>,
    pub statics: Option<Arc<StaticFiles>>,
}

/// HTTP server for the playground service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        // The engine is constructed once and shared across all requests.
        let engine = Arc::new(JexlEngine::new());
        let statics = config
            .static_files
            .enabled
            .then(|| Arc::new(StaticFiles::new(&config.static_files)));

        let state = AppState { engine, statics };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let router = Router::new()
            .route("/evaluate", post(handlers::evaluate))
            .route("/healthz", get(handlers::health));

        // SPA variant: unmatched paths hit the asset tree.
        // API-only variant: the root answers the health payload.
        let router = if state.statics.is_some() {
            router.fallback(static_handler)
        } else {
            router.route("/", get(handlers::health))
        };

        // Last layer added runs outermost: the request id must be set
        // before the trace span opens and before propagation copies it
        // onto the response.
        router
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_files = self.config.static_files.enabled,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Fallback handler for the SPA variant.
async fn static_handler(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    match &state.statics {
        Some(statics) => statics.serve(&uri).await,
        // The fallback is only registered when static serving is enabled.
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
