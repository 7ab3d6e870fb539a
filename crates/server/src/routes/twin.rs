//! Digital twin endpoints

use axum::{Json, response::IntoResponse};
use dashboard_core::twin;
use serde::Deserialize;

use crate::error::AppError;

/// Request body for a simulation run
#[derive(Deserialize)]
pub struct SimulateRequest {
    patient_id: String,
    #[serde(default)]
    scenario: String,
}

/// GET /api/twin/patients - Mock patients available for simulation
pub async fn patients() -> impl IntoResponse {
    Json(twin::mock_patients())
}

/// POST /api/twin/simulate - Project a patient's risk over the next year
pub async fn simulate(Json(body): Json<SimulateRequest>) -> Result<impl IntoResponse, AppError> {
    let patient = twin::mock_patients()
        .into_iter()
        .find(|p| p.id == body.patient_id)
        .ok_or_else(|| AppError::NotFound(format!("Patient/{} not found", body.patient_id)))?;

    let result = twin::simulate(&patient, &body.scenario)?;
    Ok(Json(result))
}
