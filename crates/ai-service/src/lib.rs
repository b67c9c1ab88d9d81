//! HTTP server for the AI service.
//!
//! Exposes a liveness endpoint at `/health`, the OpenAPI document at
//! `/openapi.json` (browsable at `/docs` and `/redoc`) and Prometheus metrics
//! at `/metrics`, with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod telemetry;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::ServerError;
use crate::shutdown::ShutdownSignal;

/// Identifier reported in the health payload.
pub const SERVICE_NAME: &str = "ai_service";

/// Human-readable title published in the API documentation.
pub const SERVICE_TITLE: &str = "AI Service";

/// Service version published in the API documentation.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates the Axum application router with all routes and fallbacks.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/openapi.json", get(routes::openapi::get))
        .route("/docs", get(routes::docs::swagger_ui))
        .route("/redoc", get(routes::docs::redoc))
        .merge(metrics_router)
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::method_not_allowed)
        .layer(axum::middleware::from_fn(middleware::track_metrics))
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.addr()` and serves `app` until SIGINT or SIGTERM.
pub async fn serve(config: &Config, app: Router) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let signals = ShutdownSignal::install()?;

    tracing::info!(%addr, "starting AI service");
    run(listener, app, signals.recv()).await
}

/// Serves `app` on an already-bound listener until `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
