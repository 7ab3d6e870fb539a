//! Audit trail for question authoring

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, header},
    middleware::Next,
    response::Response,
};
use dashboard_core::QuestionId;

use super::request_id::RequestId;
use crate::source::QuestionSource;

/// A request that writes to the question catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Authoring {
    Create,
    Update(QuestionId),
}

impl Authoring {
    fn action(self) -> &'static str {
        match self {
            Authoring::Create => "create",
            Authoring::Update(_) => "update",
        }
    }
}

/// `POST /api/questions` and `PUT /api/questions/{id}`; everything else is not audited
pub(crate) fn classify(method: &Method, path: &str) -> Option<Authoring> {
    let rest = path.strip_prefix("/api/questions")?;
    if *method == Method::POST && matches!(rest, "" | "/") {
        Some(Authoring::Create)
    } else if *method == Method::PUT {
        rest.strip_prefix('/')
            .and_then(|id| id.parse().ok())
            .map(Authoring::Update)
    } else {
        None
    }
}

/// Id of a created question, read back from the `Location` header
fn created_id(response: &Response) -> Option<QuestionId> {
    response
        .headers()
        .get(header::LOCATION)?
        .to_str()
        .ok()?
        .rsplit('/')
        .next()?
        .parse()
        .ok()
}

/// Log question creates and updates with the outcome and backing source
pub async fn audit_middleware(
    State(source): State<QuestionSource>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(authoring) = classify(request.method(), request.uri().path()) else {
        return next.run(request).await;
    };

    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let response = next.run(request).await;

    let question_id = match authoring {
        Authoring::Update(id) => Some(id),
        Authoring::Create => created_id(&response),
    };

    tracing::info!(
        target: "audit",
        request_id = %request_id,
        action = authoring.action(),
        question_id = ?question_id,
        source = source.kind(),
        status = response.status().as_u16(),
        "Question authoring"
    );

    response
}
