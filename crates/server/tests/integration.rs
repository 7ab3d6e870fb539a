//! Integration tests for the clinical question dashboard server.
//!
//! Most tests drive the router over the built-in catalog. The question
//! service and chat API are replaced by small axum stubs bound to an
//! ephemeral local port.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use dashboard_core::{Question, QuestionCreate, QuestionFilter, QuestionUpdate, fixture};
use http_body_util::BodyExt;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

use dashboard_server::config::{Config, LlmConfig};
use dashboard_server::source::QuestionSource;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const TEST_API_KEY: &str = "test-secret-key";
const TEST_LLM_KEY: &str = "test-llm-key";

fn test_config() -> Config {
    Config {
        bind_address: "0.0.0.0:0".to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        cors_origins: vec!["*".to_string()],
        rate_limit_rps: 1000,
        question_source_url: None,
        question_page_size: 100,
        llm: None,
    }
}

/// Build the app over the built-in catalog.
fn test_app() -> Router {
    dashboard_server::build_app(QuestionSource::fixture(fixture::seed()), &test_config())
}

/// Serve `router` on 127.0.0.1 and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub");
    let addr = listener.local_addr().expect("Stub has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });
    format!("http://{}", addr)
}

/// Send a request to the app and return (status, body as JSON).
async fn request(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };

    (status, body)
}

/// Build a GET request with auth header.
fn get_req(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with JSON body and auth header.
fn json_req(method: &str, uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn ids(body: &JsonValue) -> Vec<i64> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Stub question service
// ---------------------------------------------------------------------------

async fn stub_departments() -> impl IntoResponse {
    Json(fixture::departments())
}

async fn stub_department(Path(id): Path<i64>) -> impl IntoResponse {
    match fixture::departments().into_iter().find(|d| d.id == id) {
        Some(d) => Json(d).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Department not found"})))
            .into_response(),
    }
}

async fn stub_questions(
    State(listings): State<Arc<AtomicUsize>>,
    Query(filter): Query<QuestionFilter>,
) -> impl IntoResponse {
    listings.fetch_add(1, Ordering::SeqCst);
    let catalog = fixture::seed();
    let questions: Vec<Question> = catalog.list(&filter).into_iter().cloned().collect();
    Json(questions)
}

async fn stub_question(Path(id): Path<i64>) -> impl IntoResponse {
    match fixture::seed().question(id) {
        Some(q) => Json(q.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Question not found"})))
            .into_response(),
    }
}

async fn stub_create(Json(body): Json<QuestionCreate>) -> impl IntoResponse {
    if body.content.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": "content must not be empty"})),
        )
            .into_response();
    }
    let mut question = Question::new(32, body.title, body.department_id);
    question.content = body.content;
    question.analysis_summary = body.analysis_summary;
    question.slicer_query = body.slicer_dicer_query;
    Json(question).into_response()
}

async fn stub_update(Path(id): Path<i64>, Json(body): Json<QuestionUpdate>) -> impl IntoResponse {
    match fixture::seed().question(id).cloned() {
        Some(mut question) => {
            if let Some(title) = body.title {
                question.title = title;
            }
            Json(question).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"detail": "Question not found"})))
            .into_response(),
    }
}

/// App backed by the stub service; the counter tracks `GET /questions` calls
async fn rest_app_paged(page_size: usize) -> (Router, Arc<AtomicUsize>) {
    let listings = Arc::new(AtomicUsize::new(0));
    let stub = Router::new()
        .route("/departments", get(stub_departments))
        .route("/departments/{id}", get(stub_department))
        .route("/questions", get(stub_questions).post(stub_create))
        .route("/questions/{id}", get(stub_question).put(stub_update))
        .with_state(Arc::clone(&listings));
    let base_url = spawn_stub(stub).await;

    let mut config = test_config();
    config.question_source_url = Some(base_url.clone());
    config.question_page_size = page_size;
    let app = dashboard_server::build_app(QuestionSource::rest(base_url, page_size), &config);
    (app, listings)
}

async fn rest_app() -> Router {
    rest_app_paged(100).await.0
}

// ---------------------------------------------------------------------------
// Stub chat API
// ---------------------------------------------------------------------------

async fn stub_chat(headers: HeaderMap, Json(body): Json<JsonValue>) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TEST_LLM_KEY));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Incorrect API key provided"}})),
        )
            .into_response();
    }

    let messages = body["messages"].as_array().cloned().unwrap_or_default();
    let user_prompt = messages
        .iter()
        .find(|m| m["role"] == "user")
        .and_then(|m| m["content"].as_str())
        .unwrap_or_default();
    if messages.len() != 2 || !user_prompt.contains("Population/Process: Adult inpatients") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"message": "unexpected prompt"}})),
        )
            .into_response();
    }

    Json(json!({
        "choices": [{"message": {"role": "assistant", "content": "  Falls among adult inpatients are rising.  "}}]
    }))
    .into_response()
}

async fn llm_app(api_key: &str) -> Router {
    let base_url = spawn_stub(Router::new().route("/v1/chat/completions", post(stub_chat))).await;

    let mut config = test_config();
    config.llm = Some(LlmConfig {
        api_key: api_key.to_string(),
        api_url: format!("{}/v1/chat/completions", base_url),
        model: "gpt-3.5-turbo".to_string(),
        temperature: 0.7,
        max_tokens: 500,
    });
    dashboard_server::build_app(QuestionSource::fixture(fixture::seed()), &config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health() {
    let app = test_app();

    // /health is a public route, no auth needed
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = request(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["source"], "fixture");
}

#[tokio::test]
async fn test_metrics_is_public() {
    let app = test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth() {
    let app = test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/api/departments")
        .body(Body::empty())
        .unwrap();
    let (status, body) = request(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Missing or invalid API key");
    assert_eq!(body["status"], 401);

    let req = Request::builder()
        .method("GET")
        .uri("/api/departments")
        .header("X-API-Key", "wrong-key")
        .body(Body::empty())
        .unwrap();
    let (status, _) = request(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, get_req("/api/departments")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = test_app();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .header("X-Request-ID", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_rate_limit() {
    let mut config = test_config();
    config.rate_limit_rps = 1;
    let app = dashboard_server::build_app(QuestionSource::fixture(fixture::seed()), &config);

    let (first, _) = request(&app, get_req("/api/departments")).await;
    let (second, body) = request(&app, get_req("/api/departments")).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["status"], 429);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_departments() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/departments")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[2]["name"], "Cardiology");
    assert_eq!(body[2]["question_count"], 4);

    let (status, body) = request(&app, get_req("/api/departments/2/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"]["name"], "Neurology");
    assert_eq!(ids(&body["questions"]), vec![4, 5, 6]);

    let (status, body) = request(&app, get_req("/api/departments/404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Department/404 not found");
}

#[tokio::test]
async fn test_question_listing() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());

    let (_, body) = request(&app, get_req("/api/questions?skip=30&limit=5")).await;
    assert_eq!(ids(&body), vec![31]);

    let (_, body) = request(&app, get_req("/api/questions?department_id=3&tag_id=59")).await;
    assert_eq!(ids(&body), vec![7]);

    let (status, _) = request(&app, get_req("/api/questions?limit=ten")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_question_read() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/questions/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department_name"], "Endocrinology");
    assert_eq!(body["tags"][0]["name"], "Diabetes");
    assert!(body["slicer_dicer_query"].as_str().unwrap().starts_with("SELECT"));

    let (status, body) = request(&app, get_req("/api/questions/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Question/999 not found");
}

#[tokio::test]
async fn test_question_search() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/questions/search?q=atrial%20fib")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![4, 7]);
    assert_eq!(body[0]["department_name"], "Neurology");

    let (_, body) = request(&app, get_req("/api/questions/search?q=")).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_fixture_is_read_only() {
    let app = test_app();

    let new_question = json!({
        "title": "Sepsis Bundle Compliance",
        "content": "How often is the sepsis bundle completed within 3 hours?",
        "analysis_summary": "",
        "department_id": 5
    });
    let (status, body) = request(&app, json_req("POST", "/api/questions", new_question)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["detail"].as_str().unwrap().contains("QUESTION_SOURCE_URL"));

    let (status, _) = request(
        &app,
        json_req("PUT", "/api/questions/1", json!({"title": "Renamed"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_tags() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/tags")).await;
    assert_eq!(status, StatusCode::OK);
    let tags = body.as_array().unwrap();
    assert_eq!(tags[0]["id"], 57);
    assert_eq!(tags[0]["question_count"], 1);
    let stroke = tags.iter().find(|t| t["id"] == 59).unwrap();
    assert_eq!(stroke["question_count"], 2);

    let (status, body) = request(&app, get_req("/api/tags/65/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tag"]["name"], "Stroke Rehabilitation");
    assert_eq!(body["questions"].as_array().unwrap().len(), 2);

    let (status, body) = request(&app, get_req("/api/tags/1000/questions")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Tag/1000 not found");
}

#[tokio::test]
async fn test_tag_graph() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/tags/graph")).await;
    assert_eq!(status, StatusCode::OK);

    let nodes = body["nodes"].as_array().unwrap();
    let edges = body["edges"].as_array().unwrap();
    assert!(!nodes.is_empty());
    assert!(!edges.is_empty());

    // First node sits at angle zero
    assert_eq!(nodes[0]["id"], 57);
    assert_eq!(nodes[0]["x"].as_f64(), Some(1.0));
    assert_eq!(nodes[0]["marker_size"], 20);
    assert_eq!(nodes[0]["color"], "hsl(270, 70%, 50%)");

    let stroke_af = edges
        .iter()
        .find(|e| e["source"] == 59 && e["target"] == 60)
        .unwrap();
    assert_eq!(stroke_af["value"], 2);
    assert_eq!(stroke_af["width"], 2);

    assert_eq!(body["conflicts"], json!([65, 66]));
}

#[tokio::test]
async fn test_problem_constructor_validation() {
    let app = test_app();

    let (status, body) = request(
        &app,
        json_req("POST", "/api/problem-constructor/generate", json!({"problem": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "At least one field must be provided");

    // Valid input but no key configured
    let (status, body) = request(
        &app,
        json_req(
            "POST",
            "/api/problem-constructor/generate",
            json!({"problem": "Falls"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "OPENAI_API_KEY not configured");
}

#[tokio::test]
async fn test_problem_constructor_generates() {
    let app = llm_app(TEST_LLM_KEY).await;

    let (status, body) = request(
        &app,
        json_req(
            "POST",
            "/api/problem-constructor/generate",
            json!({"population": "Adult inpatients", "problem": "Falls"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "Falls among adult inpatients are rising.");
}

#[tokio::test]
async fn test_problem_constructor_bad_key() {
    let app = llm_app("wrong-key").await;

    let (status, body) = request(
        &app,
        json_req(
            "POST",
            "/api/problem-constructor/generate",
            json!({"population": "Adult inpatients"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body["detail"],
        "LLM API authentication failed. Please check your API key."
    );
}

#[tokio::test]
async fn test_twin() {
    let app = test_app();

    let (status, body) = request(&app, get_req("/api/twin/patients")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (status, body) = request(
        &app,
        json_req(
            "POST",
            "/api/twin/simulate",
            json!({"patient_id": "1", "scenario": "Start metformin"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["patient_id"], "1");
    assert_eq!(body["cardiovascular"]["timePoints"].as_array().unwrap().len(), 12);

    let (status, _) = request(
        &app,
        json_req(
            "POST",
            "/api/twin/simulate",
            json!({"patient_id": "1", "scenario": " "}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = request(
        &app,
        json_req(
            "POST",
            "/api/twin/simulate",
            json!({"patient_id": "42", "scenario": "Anything"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_source_snapshot() {
    let app = rest_app().await;

    let (status, body) = request(&app, get_req("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "rest");

    let (status, body) = request(&app, get_req("/api/tags/graph")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["conflicts"], json!([65, 66]));

    let (_, body) = request(&app, get_req("/api/questions?department_id=2")).await;
    assert_eq!(ids(&body), vec![4, 5, 6]);

    let (status, body) = request(&app, get_req("/api/departments/8")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Gastroenterology");

    let (status, _) = request(&app, get_req("/api/departments/404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(&app, get_req("/api/questions/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department_name"], "Endocrinology");

    let (status, _) = request(&app, get_req("/api/questions/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_source_authoring() {
    let app = rest_app().await;

    let new_question = json!({
        "title": "Sepsis Bundle Compliance",
        "content": "How often is the sepsis bundle completed within 3 hours?",
        "analysis_summary": "",
        "department_id": 5
    });
    let response = app
        .clone()
        .oneshot(json_req("POST", "/api/questions", new_question))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["location"], "/api/questions/32");

    let rejected = json!({
        "title": "Empty",
        "content": "",
        "analysis_summary": "",
        "department_id": 5
    });
    let (status, body) = request(&app, json_req("POST", "/api/questions", rejected)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "content must not be empty");

    let (status, body) = request(
        &app,
        json_req("PUT", "/api/questions/2", json!({"title": "Thyroid Patterns"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Thyroid Patterns");

    let (status, _) = request(
        &app,
        json_req("PUT", "/api/questions/999", json!({"title": "Missing"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rest_source_unreachable() {
    // Nothing listens on port 9 locally
    let app = dashboard_server::build_app(
        QuestionSource::rest("http://127.0.0.1:9", 100),
        &test_config(),
    );

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = request(&app, req).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");

    let (status, _) = request(&app, get_req("/api/tags")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_rest_snapshot_walks_every_page() {
    let (app, listings) = rest_app_paged(10).await;

    let (status, body) = request(&app, get_req("/api/departments")).await;
    assert_eq!(status, StatusCode::OK);
    let total: i64 = body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["question_count"].as_i64().unwrap())
        .sum();
    assert_eq!(total, 31);
    // 10 + 10 + 10 + 1
    assert_eq!(listings.load(Ordering::SeqCst), 4);

    let (_, body) = request(&app, get_req("/api/tags/graph")).await;
    let (_, fixture_body) = request(&test_app(), get_req("/api/tags/graph")).await;
    assert_eq!(body["nodes"], fixture_body["nodes"]);
    assert_eq!(body["edges"], fixture_body["edges"]);
}

#[tokio::test]
async fn test_rest_exact_multiple_page_size() {
    // A full last page is followed by one empty page
    let (app, listings) = rest_app_paged(31).await;

    let (_, body) = request(&app, get_req("/api/tags")).await;
    let (_, fixture_body) = request(&test_app(), get_req("/api/tags")).await;
    assert_eq!(body, fixture_body);
    assert_eq!(listings.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_rest_question_read_skips_snapshot() {
    let (app, listings) = rest_app_paged(10).await;

    let (status, body) = request(&app, get_req("/api/questions/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department_name"], "Cardiology");
    assert_eq!(listings.load(Ordering::SeqCst), 0);
}
