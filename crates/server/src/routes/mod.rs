pub mod departments;
pub mod health;
pub mod metrics;
pub mod problem;
pub mod questions;
pub mod tags;
pub mod twin;

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use dashboard_core::ErrorBody;

use crate::source::QuestionSource;

/// Build dashboard API routes
pub fn api_routes() -> Router<QuestionSource> {
    Router::new()
        .route("/departments", get(departments::list))
        .route("/departments/{id}", get(departments::read))
        .route("/departments/{id}/questions", get(departments::questions))
        .route("/questions", get(questions::list).post(questions::create))
        .route("/questions/search", get(questions::search))
        .route(
            "/questions/{id}",
            get(questions::read).put(questions::update),
        )
        .route("/tags", get(tags::list))
        .route("/tags/graph", get(tags::graph))
        .route("/tags/{id}/questions", get(tags::questions))
        .route("/problem-constructor/generate", post(problem::generate))
        .route("/twin/patients", get(twin::patients))
        .route("/twin/simulate", post(twin::simulate))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::not_found(&format!("No route for {}", uri.path()))),
    )
}
