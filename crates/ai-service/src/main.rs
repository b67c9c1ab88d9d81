//! AI service entry point.

use ai_service::config::Config;
use ai_service::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    ai_service::telemetry::init(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()?;

    // 3. Build the application and serve it
    let app = ai_service::create_app(metrics_handle);
    if let Err(err) = ai_service::serve(&config, app).await {
        tracing::error!(error = %err, "server failed");
        return Err(err);
    }

    Ok(())
}
