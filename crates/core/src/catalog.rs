//! Immutable snapshot of departments and questions, plus the read-side
//! queries the dashboard needs over it.

use serde::Deserialize;

use crate::graph::TagGraph;
use crate::layout::TagLayout;
use crate::model::{Department, DepartmentId, Question, QuestionId, Tag, TagId};

/// Default page size, matching the question service's listing
pub const DEFAULT_LIMIT: usize = 10;

/// Paging and filtering for question listings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuestionFilter {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub department_id: Option<DepartmentId>,
    pub tag_id: Option<TagId>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for QuestionFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
            department_id: None,
            tag_id: None,
        }
    }
}

impl QuestionFilter {
    fn matches(&self, question: &Question) -> bool {
        self.department_id
            .is_none_or(|id| question.department_id == id)
            && self.tag_id.is_none_or(|id| question.has_tag(id))
    }
}

/// Departments and questions as loaded from a source
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    departments: Vec<Department>,
    questions: Vec<Question>,
}

impl Catalog {
    pub fn new(departments: Vec<Department>, questions: Vec<Question>) -> Self {
        Self {
            departments,
            questions,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Departments with `question_count` filled in
    pub fn departments(&self) -> Vec<Department> {
        self.departments
            .iter()
            .map(|d| Department {
                question_count: Some(self.count_for_department(d.id)),
                ..d.clone()
            })
            .collect()
    }

    pub fn department(&self, id: DepartmentId) -> Option<Department> {
        self.departments
            .iter()
            .find(|d| d.id == id)
            .map(|d| Department {
                question_count: Some(self.count_for_department(d.id)),
                ..d.clone()
            })
    }

    fn count_for_department(&self, id: DepartmentId) -> usize {
        self.questions
            .iter()
            .filter(|q| q.department_id == id)
            .count()
    }

    /// Department name for a question; `None` when the reference is orphaned
    pub fn department_name(&self, question: &Question) -> Option<&str> {
        self.departments
            .iter()
            .find(|d| d.id == question.department_id)
            .map(|d| d.name.as_str())
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn questions_for_department(&self, id: DepartmentId) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.department_id == id)
            .collect()
    }

    /// First occurrence of a tag id across questions.
    ///
    /// The tag page shows the first-seen record while the graph keeps the
    /// last one; with reused ids the two can differ.
    pub fn first_tag(&self, id: TagId) -> Option<&Tag> {
        self.questions
            .iter()
            .flat_map(|q| q.tags.iter())
            .find(|t| t.id == id)
    }

    pub fn questions_with_tag(&self, id: TagId) -> Vec<&Question> {
        self.questions.iter().filter(|q| q.has_tag(id)).collect()
    }

    pub fn list(&self, filter: &QuestionFilter) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| filter.matches(q))
            .skip(filter.skip)
            .take(filter.limit)
            .collect()
    }

    /// Case-insensitive substring match over title, content and tag names
    pub fn search(&self, query: &str) -> Vec<&Question> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.questions
            .iter()
            .filter(|q| {
                q.title.to_lowercase().contains(&needle)
                    || q.content.to_lowercase().contains(&needle)
                    || q.tags.iter().any(|t| t.name.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn tag_graph(&self) -> TagGraph {
        TagGraph::build(&self.questions)
    }

    pub fn tag_layout(&self) -> TagLayout {
        TagLayout::circular(&self.tag_graph())
    }
}
