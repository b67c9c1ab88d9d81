//! OpenAPI document describing the service.

use axum::Json;
use utoipa::OpenApi;

use crate::routes::health::HealthResponse;
use crate::{SERVICE_TITLE, SERVICE_VERSION};

#[derive(OpenApi)]
#[openapi(
    paths(crate::routes::health::check),
    components(schemas(HealthResponse)),
    tags((name = "health", description = "Liveness probes"))
)]
pub struct ApiDoc;

/// Builds the document with the service title and version in `info`.
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = SERVICE_TITLE.to_string();
    doc.info.version = SERVICE_VERSION.to_string();
    doc
}

/// GET /openapi.json
pub async fn get() -> Json<utoipa::openapi::OpenApi> {
    Json(document())
}
