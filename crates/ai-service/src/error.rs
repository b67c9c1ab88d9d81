//! API error types with HTTP response mapping, plus server lifecycle errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matches the request path.
    #[error("Not Found")]
    NotFound,
    /// The path exists but not for the request method.
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    /// Unexpected server-side failure. The message is logged, never returned.
    #[error("Internal Server Error")]
    Internal(String),
}

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(msg) = &self {
            tracing::error!(error = %msg, "internal server error");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A shutdown signal handler could not be registered.
    #[error("failed to install {signal} handler: {source}")]
    Signal {
        signal: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The accept loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The Prometheus recorder could not be installed.
    #[error("failed to install Prometheus recorder: {0}")]
    MetricsRecorder(#[from] metrics_exporter_prometheus::BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_detail() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "Not Found" })
        );
    }

    #[tokio::test]
    async fn method_not_allowed_maps_to_405_with_detail() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "Method Not Allowed" })
        );
    }

    #[tokio::test]
    async fn internal_maps_to_500_without_echoing_the_message() {
        let response = ApiError::Internal("renderer lost its connection pool".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "detail": "Internal Server Error" }));
        assert!(!json.to_string().contains("connection pool"));
    }

    #[test]
    fn signal_error_names_the_signal() {
        let err = ServerError::Signal {
            signal: "SIGTERM",
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().starts_with("failed to install SIGTERM handler"));
    }

    #[test]
    fn bind_error_names_the_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:8000".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().starts_with("failed to bind 0.0.0.0:8000"));
    }
}
