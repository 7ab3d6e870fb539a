//! Department HTTP handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use dashboard_core::{Department, DepartmentId, Question};
use serde::Serialize;

use crate::error::AppError;
use crate::source::QuestionSource;

/// A department with the questions it owns
#[derive(Serialize)]
pub struct DepartmentQuestions {
    department: Department,
    questions: Vec<Question>,
}

/// GET /api/departments - All departments with question counts
pub async fn list(State(source): State<QuestionSource>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(source.departments().await?))
}

/// GET /api/departments/{id} - Read a department
pub async fn read(
    State(source): State<QuestionSource>,
    Path(id): Path<DepartmentId>,
) -> Result<impl IntoResponse, AppError> {
    match source.department(id).await? {
        Some(department) => Ok(Json(department)),
        None => Err(AppError::NotFound(format!("Department/{} not found", id))),
    }
}

/// GET /api/departments/{id}/questions - Questions owned by a department
pub async fn questions(
    State(source): State<QuestionSource>,
    Path(id): Path<DepartmentId>,
) -> Result<impl IntoResponse, AppError> {
    let catalog = source.snapshot().await?;
    let department = catalog
        .department(id)
        .ok_or_else(|| AppError::NotFound(format!("Department/{} not found", id)))?;

    let questions = catalog
        .questions_for_department(id)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(DepartmentQuestions {
        department,
        questions,
    }))
}
