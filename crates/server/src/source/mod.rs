//! Where questions come from: the built-in catalog or the question service.

mod rest;

pub use rest::RestClient;

use std::sync::Arc;

use dashboard_core::{
    Catalog, DashboardError, Department, DepartmentId, Question, QuestionCreate, QuestionFilter,
    QuestionId, QuestionUpdate,
};

/// Question provider shared by all handlers
#[derive(Clone)]
pub enum QuestionSource {
    /// Immutable in-memory catalog
    Fixture(Arc<Catalog>),
    /// External question service; snapshots page through it `page_size` at a time
    Rest { client: RestClient, page_size: usize },
}

impl QuestionSource {
    pub fn fixture(catalog: Catalog) -> Self {
        QuestionSource::Fixture(Arc::new(catalog))
    }

    pub fn rest(base_url: impl Into<String>, page_size: usize) -> Self {
        QuestionSource::Rest {
            client: RestClient::new(base_url),
            page_size,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            QuestionSource::Fixture(_) => "fixture",
            QuestionSource::Rest { .. } => "rest",
        }
    }

    /// Materialize every department and question.
    ///
    /// Derived views (graph, counts, search) are computed from the
    /// snapshot, so each call sees the source as it is right now.
    pub async fn snapshot(&self) -> Result<Arc<Catalog>, DashboardError> {
        match self {
            QuestionSource::Fixture(catalog) => Ok(Arc::clone(catalog)),
            QuestionSource::Rest { client, page_size } => {
                let (departments, questions) =
                    tokio::try_join!(client.departments(), client.all_questions(*page_size))?;
                tracing::debug!(
                    departments = departments.len(),
                    questions = questions.len(),
                    "Fetched snapshot from question service"
                );
                Ok(Arc::new(Catalog::new(departments, questions)))
            }
        }
    }

    pub async fn departments(&self) -> Result<Vec<Department>, DashboardError> {
        Ok(self.snapshot().await?.departments())
    }

    pub async fn department(&self, id: DepartmentId) -> Result<Option<Department>, DashboardError> {
        match self {
            QuestionSource::Fixture(catalog) => Ok(catalog.department(id)),
            QuestionSource::Rest { client, .. } => client.department(id).await,
        }
    }

    pub async fn list(&self, filter: &QuestionFilter) -> Result<Vec<Question>, DashboardError> {
        match self {
            QuestionSource::Fixture(catalog) => {
                Ok(catalog.list(filter).into_iter().cloned().collect())
            }
            QuestionSource::Rest { client, .. } => client.questions(filter).await,
        }
    }

    pub async fn question(&self, id: QuestionId) -> Result<Option<Question>, DashboardError> {
        match self {
            QuestionSource::Fixture(catalog) => Ok(catalog.question(id).cloned()),
            QuestionSource::Rest { client, .. } => client.question(id).await,
        }
    }

    pub async fn create_question(&self, body: &QuestionCreate) -> Result<Question, DashboardError> {
        match self {
            QuestionSource::Fixture(_) => Err(read_only()),
            QuestionSource::Rest { client, .. } => client.create_question(body).await,
        }
    }

    pub async fn update_question(
        &self,
        id: QuestionId,
        body: &QuestionUpdate,
    ) -> Result<Option<Question>, DashboardError> {
        match self {
            QuestionSource::Fixture(_) => Err(read_only()),
            QuestionSource::Rest { client, .. } => client.update_question(id, body).await,
        }
    }

    /// Check the source can be reached
    pub async fn ping(&self) -> Result<(), DashboardError> {
        match self {
            QuestionSource::Fixture(_) => Ok(()),
            QuestionSource::Rest { client, .. } => client.departments().await.map(|_| ()),
        }
    }
}

fn read_only() -> DashboardError {
    DashboardError::ReadOnly(
        "The built-in catalog is read-only; configure QUESTION_SOURCE_URL to author questions"
            .to_string(),
    )
}
