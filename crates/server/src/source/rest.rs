use dashboard_core::{
    DashboardError, Department, DepartmentId, Question, QuestionCreate, QuestionFilter,
    QuestionId, QuestionUpdate,
};
use reqwest::{RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value as JsonValue;

/// Upper bound on pages requested for one snapshot
const MAX_PAGES: usize = 1000;

/// Error body returned by the question service
#[derive(Debug, Deserialize)]
struct ServiceError {
    detail: JsonValue,
}

/// HTTP client for the external question/department service
#[derive(Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request; `Ok(None)` on 404
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, DashboardError> {
        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::Upstream(format!("Question service unreachable: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ServiceError>(&body) {
                Ok(ServiceError {
                    detail: JsonValue::String(msg),
                }) => msg,
                Ok(ServiceError { detail }) => detail.to_string(),
                Err(_) => body,
            };
            // Validation errors are the caller's fault; pass them through as such
            if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
                return Err(DashboardError::Invalid(detail));
            }
            return Err(DashboardError::Upstream(format!(
                "Question service error ({}): {}",
                status, detail
            )));
        }

        response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| DashboardError::Upstream(format!("Failed to parse response: {}", e)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        what: &str,
    ) -> Result<T, DashboardError> {
        self.send(request)
            .await?
            .ok_or_else(|| DashboardError::Upstream(format!("{} endpoint not found", what)))
    }

    /// GET /departments
    pub async fn departments(&self) -> Result<Vec<Department>, DashboardError> {
        self.fetch(self.http.get(self.url("/departments")), "Departments")
            .await
    }

    /// GET /departments/{id}
    pub async fn department(&self, id: DepartmentId) -> Result<Option<Department>, DashboardError> {
        self.send(self.http.get(self.url(&format!("/departments/{}", id))))
            .await
    }

    /// GET /questions with paging and filters
    pub async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, DashboardError> {
        let mut query = vec![
            ("skip", filter.skip.to_string()),
            ("limit", filter.limit.to_string()),
        ];
        if let Some(id) = filter.department_id {
            query.push(("department_id", id.to_string()));
        }
        if let Some(id) = filter.tag_id {
            query.push(("tag_id", id.to_string()));
        }

        self.fetch(self.http.get(self.url("/questions")).query(&query), "Questions")
            .await
    }

    /// Every question, fetched `page_size` at a time until a short page.
    ///
    /// Stops after `MAX_PAGES` pages in case the service ignores `skip`.
    pub async fn all_questions(&self, page_size: usize) -> Result<Vec<Question>, DashboardError> {
        let page_size = page_size.max(1);
        let mut filter = QuestionFilter {
            limit: page_size,
            ..Default::default()
        };
        let mut questions = Vec::new();

        for page in 0..MAX_PAGES {
            let batch = self.questions(&filter).await?;
            let fetched = batch.len();
            questions.extend(batch);

            if fetched < page_size {
                tracing::debug!(
                    pages = page + 1,
                    questions = questions.len(),
                    "Fetched all questions"
                );
                return Ok(questions);
            }
            filter.skip += page_size;
        }

        tracing::warn!(
            pages = MAX_PAGES,
            page_size = page_size,
            questions = questions.len(),
            "Question service paging limit reached; snapshot may be incomplete"
        );
        Ok(questions)
    }

    /// GET /questions/{id}
    pub async fn question(&self, id: QuestionId) -> Result<Option<Question>, DashboardError> {
        self.send(self.http.get(self.url(&format!("/questions/{}", id))))
            .await
    }

    /// POST /questions
    pub async fn create_question(&self, body: &QuestionCreate) -> Result<Question, DashboardError> {
        self.fetch(self.http.post(self.url("/questions")).json(body), "Questions")
            .await
    }

    /// PUT /questions/{id}
    pub async fn update_question(
        &self,
        id: QuestionId,
        body: &QuestionUpdate,
    ) -> Result<Option<Question>, DashboardError> {
        self.send(
            self.http
                .put(self.url(&format!("/questions/{}", id)))
                .json(body),
        )
        .await
    }
}
