//! Tag explorer handlers: tag list, co-occurrence graph, per-tag questions

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use dashboard_core::{Tag, TagId, TagLayout};
use serde::Serialize;

use super::questions::QuestionDetail;
use crate::error::AppError;
use crate::source::QuestionSource;

/// Tag with the number of distinct questions bearing it
#[derive(Serialize)]
pub struct TagSummary {
    #[serde(flatten)]
    tag: Tag,
    question_count: usize,
}

/// Circular layout plus the tag ids whose records disagree across questions
#[derive(Serialize)]
pub struct TagGraphResponse {
    #[serde(flatten)]
    layout: TagLayout,
    conflicts: Vec<TagId>,
}

#[derive(Serialize)]
pub struct TagQuestions {
    tag: Tag,
    questions: Vec<QuestionDetail>,
}

/// GET /api/tags - Distinct tags in first-seen order
pub async fn list(State(source): State<QuestionSource>) -> Result<impl IntoResponse, AppError> {
    let graph = source.snapshot().await?.tag_graph();
    let tags: Vec<TagSummary> = graph
        .tags()
        .map(|tag| TagSummary {
            tag: tag.clone(),
            question_count: graph.question_count(tag.id),
        })
        .collect();

    Ok(Json(tags))
}

/// GET /api/tags/graph - Tag network laid out on the unit circle
pub async fn graph(State(source): State<QuestionSource>) -> Result<impl IntoResponse, AppError> {
    let graph = source.snapshot().await?.tag_graph();
    let layout = TagLayout::circular(&graph);

    tracing::debug!(
        nodes = layout.nodes.len(),
        edges = layout.edges.len(),
        "Built tag graph"
    );

    Ok(Json(TagGraphResponse {
        conflicts: graph.conflicts().collect(),
        layout,
    }))
}

/// GET /api/tags/{id}/questions - Questions bearing a tag
pub async fn questions(
    State(source): State<QuestionSource>,
    Path(id): Path<TagId>,
) -> Result<impl IntoResponse, AppError> {
    let catalog = source.snapshot().await?;
    let tag = catalog
        .first_tag(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Tag/{} not found", id)))?;

    let questions = catalog
        .questions_with_tag(id)
        .into_iter()
        .map(|q| QuestionDetail::resolve(&catalog, q.clone()))
        .collect();

    Ok(Json(TagQuestions { tag, questions }))
}
