//! Browsable API documentation pages over `/openapi.json`.
//!
//! Both pages load their viewer from a CDN at runtime, so nothing is
//! downloaded or embedded at build time.

use axum::response::Html;

use crate::SERVICE_TITLE;

const OPENAPI_URL: &str = "/openapi.json";

/// GET /docs — Swagger UI.
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html>
<head>
<title>{SERVICE_TITLE} - Swagger UI</title>
<meta charset="utf-8">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
SwaggerUIBundle({{ url: "{OPENAPI_URL}", dom_id: "#swagger-ui" }});
</script>
</body>
</html>
"##
    ))
}

/// GET /redoc — ReDoc.
pub async fn redoc() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{SERVICE_TITLE} - ReDoc</title>
<meta charset="utf-8">
</head>
<body>
<redoc spec-url="{OPENAPI_URL}"></redoc>
<script src="https://cdn.jsdelivr.net/npm/redoc@2/bundles/redoc.standalone.js"></script>
</body>
</html>
"#
    ))
}
