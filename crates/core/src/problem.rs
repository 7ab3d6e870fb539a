//! Prompt construction for the quality-improvement problem statement.
//!
//! Only the text sent to the model lives here; the HTTP client that
//! carries it is in the server crate.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

pub const SYSTEM_PROMPT: &str = "You are a healthcare quality improvement expert helping to formulate clear problem statements. You can make reasonable assumptions when information is missing.";

/// Free-text inputs from the clinician; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemStatementRequest {
    #[serde(default)]
    pub population: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub consequences: Option<String>,
    #[serde(default)]
    pub factors: Option<String>,
}

fn filled(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl ProblemStatementRequest {
    /// Labelled lines for the fields that were filled in, in form order
    pub fn prompt_lines(&self) -> Vec<String> {
        [
            ("Population/Process", &self.population),
            ("Location/Setting", &self.location),
            ("Problem Description", &self.problem),
            ("Evidence/Data", &self.evidence),
            ("Negative Consequences", &self.consequences),
            ("Contributing Factors", &self.factors),
        ]
        .into_iter()
        .filter_map(|(label, value)| filled(value).map(|v| format!("{label}: {v}")))
        .collect()
    }

    /// Build the user prompt; fails when no field was filled in
    pub fn prompt(&self) -> Result<String, DashboardError> {
        let lines = self.prompt_lines();
        if lines.is_empty() {
            return Err(DashboardError::Invalid(
                "At least one field must be provided".to_string(),
            ));
        }

        Ok(format!(
            "Based on the following information, generate a well-structured problem statement for healthcare quality improvement:\n\n{}\n\nPlease format the response as a clear, concise problem statement. If certain information is missing, use appropriate placeholders or make reasonable assumptions based on the provided context.",
            lines.join("\n")
        ))
    }
}

/// Response body for a generated statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemStatement {
    pub result: String,
}
