//! Quality-improvement problem statement generation

use dashboard_core::ProblemStatementRequest;
use dashboard_core::problem::SYSTEM_PROMPT;

use super::client::{AiError, ChatClient};

/// Turn the clinician's free-text fields into a problem statement.
///
/// `prompt` is built (and validated) by the caller so an empty form is
/// rejected before any request leaves the server.
pub async fn generate_statement(
    client: &ChatClient,
    request: &ProblemStatementRequest,
    prompt: &str,
) -> Result<String, AiError> {
    tracing::info!(
        fields = request.prompt_lines().len(),
        "Requesting problem statement"
    );
    tracing::debug!(prompt = %prompt, "Problem statement prompt");

    let statement = client.complete(SYSTEM_PROMPT, prompt).await?;

    tracing::info!(chars = statement.len(), "Generated problem statement");
    Ok(statement)
}
