//! Health check endpoint

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::source::QuestionSource;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

/// GET /health - Check the question source is reachable
pub async fn check(State(source): State<QuestionSource>) -> impl IntoResponse {
    match source.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                source: source.kind(),
                reason: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy".to_string(),
                    source: source.kind(),
                    reason: Some(e.to_string()),
                }),
            )
        }
    }
}
