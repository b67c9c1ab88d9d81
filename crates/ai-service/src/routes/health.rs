//! Health check endpoint.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::SERVICE_NAME;

/// Liveness payload. Always `{"ok": true, "service": "ai_service"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthResponse {
    pub ok: bool,
    #[schema(value_type = String, example = "ai_service")]
    pub service: &'static str,
}

impl HealthResponse {
    pub fn alive() -> Self {
        Self {
            ok: true,
            service: SERVICE_NAME,
        }
    }
}

/// GET /health — reports that the service process is alive.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse::alive())
}
