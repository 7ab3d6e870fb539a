//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard_core::{DashboardError, ErrorBody};

/// Application error type
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Conflict(String),
    BadGateway(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg)
            | AppError::BadGateway(msg)
            | AppError::ServiceUnavailable(msg)
            | AppError::Internal(msg) => msg,
        };

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %detail, "Request failed");
        }

        (status, Json(ErrorBody::new(status.as_u16(), detail))).into_response()
    }
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::NotFound(msg) => AppError::NotFound(msg),
            DashboardError::Invalid(msg) => AppError::BadRequest(msg),
            DashboardError::ReadOnly(msg) => AppError::Conflict(msg),
            DashboardError::Upstream(msg) => AppError::BadGateway(msg),
            DashboardError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<crate::ai::AiError> for AppError {
    fn from(err: crate::ai::AiError) -> Self {
        use crate::ai::AiError;
        match err {
            AiError::Authentication(msg) => {
                tracing::error!(error = %msg, "Chat API authentication failed");
                AppError::Unauthorized(
                    "LLM API authentication failed. Please check your API key.".to_string(),
                )
            }
            AiError::Api { .. } => AppError::BadGateway(err.to_string()),
            AiError::Http(_) | AiError::Parse(_) | AiError::Empty => {
                AppError::Internal(format!("Problem statement generation failed: {}", err))
            }
        }
    }
}
