//! dashboard-core: Clinical question model and tag graph
//!
//! This crate holds the question/tag/department records, the built-in seed
//! catalog, the tag co-occurrence graph with its circular layout, and the
//! pure parts of the problem-statement and digital-twin features.

pub mod catalog;
pub mod error;
pub mod fixture;
pub mod graph;
pub mod layout;
pub mod model;
pub mod problem;
pub mod twin;

pub use catalog::{Catalog, QuestionFilter};
pub use error::{DashboardError, ErrorBody};
pub use graph::{TagGraph, TagPair};
pub use layout::{Point, TagEdge, TagLayout, TagNode};
pub use model::{
    Department, DepartmentId, Question, QuestionCreate, QuestionId, QuestionUpdate, Tag, TagId,
};
pub use problem::{ProblemStatement, ProblemStatementRequest};
pub use twin::{Patient, SimulationResult};
