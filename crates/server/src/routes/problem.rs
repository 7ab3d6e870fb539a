//! Problem statement constructor endpoint

use axum::{Extension, Json, response::IntoResponse};
use dashboard_core::{ProblemStatement, ProblemStatementRequest};

use crate::ai::ChatClient;
use crate::error::AppError;

/// POST /api/problem-constructor/generate - Draft a QI problem statement
///
/// At least one field must be filled in. The drafted statement comes back
/// as `{"result": ...}`; vendor failures are reported once, never retried.
pub async fn generate(
    Extension(client): Extension<Option<ChatClient>>,
    Json(body): Json<ProblemStatementRequest>,
) -> Result<impl IntoResponse, AppError> {
    let prompt = body.prompt()?;

    let client = client.ok_or_else(|| {
        AppError::ServiceUnavailable("OPENAI_API_KEY not configured".to_string())
    })?;

    let result = crate::ai::problem::generate_statement(&client, &body, &prompt).await?;

    Ok(Json(ProblemStatement { result }))
}
