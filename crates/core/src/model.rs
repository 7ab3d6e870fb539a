//! Question, tag and department records.
//!
//! Field names follow the question service's JSON, so these types
//! deserialize straight from its responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TagId = i64;
pub type QuestionId = i64;
pub type DepartmentId = i64;

/// A clinical-vocabulary label attached to questions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snomed_concept_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub severity: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tag {
    pub fn new(id: TagId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            snomed_concept_id: None,
            description: None,
            severity: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_snomed(mut self, concept_id: impl Into<String>) -> Self {
        self.snomed_concept_id = Some(concept_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_severity(mut self, severity: i32) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }
}

/// An organizational unit that owns questions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Derived; only filled in by listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A clinical data-analysis request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub content: String,
    pub analysis_summary: String,

    #[serde(
        rename = "slicer_dicer_query",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub slicer_query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_path: Option<String>,

    /// Not enforced; may point at a department that does not exist
    pub department_id: DepartmentId,

    /// Owned copies of the tags the question was created with
    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    pub fn new(id: QuestionId, title: impl Into<String>, department_id: DepartmentId) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            analysis_summary: String::new(),
            slicer_query: None,
            screenshot_path: None,
            department_id,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }
}

/// Body for creating a question through the question service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionCreate {
    pub title: String,
    pub content: String,
    pub analysis_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slicer_dicer_query: Option<String>,
    pub department_id: DepartmentId,
}

/// Partial update; absent fields are left untouched by the service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slicer_dicer_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
}
