//! HTTP Gateway
//!
//! axum router over the account service and the transfer workflow. Every
//! request gets its own [`RequestContext`](crate::context::RequestContext)
//! with the configured deadline; a dropped connection drops the handler
//! future and with it any pending retry wait.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

// OpenAPI / Swagger UI
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

/// Build the complete router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Accounts
        .route("/accounts", post(handlers::open_account))
        .route("/accounts/{id}", get(handlers::get_account))
        .route("/accounts/{id}/deposit", post(handlers::deposit))
        // Transfers
        .route("/transfers", post(handlers::create_transfer))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")
}

/// Bind `host:port` and serve until Ctrl-C
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {} (port already in use?)", addr))?;

    info!(addr = %addr, "Gateway listening");
    info!(url = %format!("http://{}/docs", addr), "API docs");

    serve(listener, state, async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => {
                warn!(error = %e, "Ctrl-C handler unavailable, serving until killed");
                std::future::pending::<()>().await
            }
        }
    })
    .await
}
