use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dashboard error types
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    #[error("Read-only source: {0}")]
    ReadOnly(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body returned by every failing endpoint.
///
/// Mirrors the `{"detail": ...}` shape the question service uses, so
/// clients can show the message in a single notification either way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            status,
        }
    }

    pub fn not_found(detail: &str) -> Self {
        Self::new(404, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_detail_and_status() {
        let body = ErrorBody::not_found("Question/7 not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["detail"], "Question/7 not found");
        assert_eq!(json["status"], 404);
    }

    #[test]
    fn display_includes_message() {
        let err = DashboardError::Invalid("empty scenario".to_string());
        assert_eq!(err.to_string(), "Invalid request: empty scenario");
    }
}
