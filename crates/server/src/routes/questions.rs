//! Question HTTP handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use dashboard_core::{
    Catalog, Question, QuestionCreate, QuestionFilter, QuestionId, QuestionUpdate,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::source::QuestionSource;

/// Question plus its resolved department name (`null` when orphaned)
#[derive(Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: Question,
    pub department_name: Option<String>,
}

impl QuestionDetail {
    pub fn resolve(catalog: &Catalog, question: Question) -> Self {
        let department_name = catalog.department_name(&question).map(String::from);
        Self {
            question,
            department_name,
        }
    }
}

/// Query parameters for question search
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// GET /api/questions - List questions with paging and filters
pub async fn list(
    State(source): State<QuestionSource>,
    Query(filter): Query<QuestionFilter>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(source.list(&filter).await?))
}

/// GET /api/questions/search?q= - Substring search over titles, content and tags
pub async fn search(
    State(source): State<QuestionSource>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let catalog = source.snapshot().await?;
    let results: Vec<QuestionDetail> = catalog
        .search(&params.q)
        .into_iter()
        .map(|q| QuestionDetail::resolve(&catalog, q.clone()))
        .collect();

    tracing::debug!(query = %params.q, hits = results.len(), "Question search");
    Ok(Json(results))
}

/// GET /api/questions/{id} - Read a question
pub async fn read(
    State(source): State<QuestionSource>,
    Path(id): Path<QuestionId>,
) -> Result<impl IntoResponse, AppError> {
    let question = source
        .question(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Question/{} not found", id)))?;
    let department_name = source
        .department(question.department_id)
        .await?
        .map(|d| d.name);

    Ok(Json(QuestionDetail {
        question,
        department_name,
    }))
}

/// POST /api/questions - Create a question through the question service
pub async fn create(
    State(source): State<QuestionSource>,
    Json(body): Json<QuestionCreate>,
) -> Result<impl IntoResponse, AppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::BadRequest("Question title is required".to_string()));
    }

    let question = source.create_question(&body).await?;
    tracing::info!(question_id = question.id, "Question created");

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/questions/{}", question.id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(question)))
}

/// PUT /api/questions/{id} - Update a question through the question service
pub async fn update(
    State(source): State<QuestionSource>,
    Path(id): Path<QuestionId>,
    Json(body): Json<QuestionUpdate>,
) -> Result<impl IntoResponse, AppError> {
    match source.update_question(id, &body).await? {
        Some(question) => Ok(Json(question)),
        None => Err(AppError::NotFound(format!("Question/{} not found", id))),
    }
}
