//! Tag co-occurrence graph built from a question set.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

use crate::model::{Question, QuestionId, Tag, TagId};

/// Unordered pair of distinct tag ids, stored as `(min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagPair {
    low: TagId,
    high: TagId,
}

impl TagPair {
    /// Returns `None` for a self-pair.
    pub fn new(a: TagId, b: TagId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> TagId {
        self.low
    }

    pub fn high(&self) -> TagId {
        self.high
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl Serialize for TagPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Derived tag graph: distinct tags, per-tag membership and pair weights.
///
/// Rebuilt from scratch for every question set; there is no incremental
/// update path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagGraph {
    /// Last-seen value per id, iterated in first-seen id order
    tags: IndexMap<TagId, Tag>,
    members: IndexMap<TagId, BTreeSet<QuestionId>>,
    co_occurrence: BTreeMap<TagPair, u32>,
    /// Ids seen with differing field values across occurrences
    conflicts: IndexSet<TagId>,
}

impl TagGraph {
    pub fn build(questions: &[Question]) -> Self {
        let mut graph = Self::default();

        for question in questions {
            // Tag ids on this question in first-seen order, duplicates dropped
            let mut distinct: IndexSet<TagId> = IndexSet::with_capacity(question.tags.len());

            for tag in &question.tags {
                if let Some(previous) = graph.tags.insert(tag.id, tag.clone()) {
                    if previous != *tag {
                        graph.conflicts.insert(tag.id);
                    }
                }
                graph
                    .members
                    .entry(tag.id)
                    .or_default()
                    .insert(question.id);
                distinct.insert(tag.id);
            }

            let ids: Vec<TagId> = distinct.into_iter().collect();
            for (i, &a) in ids.iter().enumerate() {
                for &b in &ids[i + 1..] {
                    if let Some(pair) = TagPair::new(a, b) {
                        *graph.co_occurrence.entry(pair).or_insert(0) += 1;
                    }
                }
            }
        }

        if !graph.conflicts.is_empty() {
            tracing::warn!(
                tag_ids = ?graph.conflicts,
                "Tag ids carry differing values across questions; keeping last seen"
            );
        }

        graph
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    pub fn tag(&self, id: TagId) -> Option<&Tag> {
        self.tags.get(&id)
    }

    /// Tags in first-seen id order
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }

    /// Number of distinct questions bearing the tag; 0 when unknown
    pub fn question_count(&self, id: TagId) -> usize {
        self.members.get(&id).map_or(0, BTreeSet::len)
    }

    #[cfg(test)]
    pub(crate) fn question_ids(&self, id: TagId) -> impl Iterator<Item = QuestionId> + '_ {
        self.members.get(&id).into_iter().flatten().copied()
    }

    /// Co-occurrence count for an unordered pair; 0 for self-pairs
    pub fn co_occurrence(&self, a: TagId, b: TagId) -> u32 {
        TagPair::new(a, b)
            .and_then(|pair| self.co_occurrence.get(&pair).copied())
            .unwrap_or(0)
    }

    pub fn pairs(&self) -> impl Iterator<Item = (TagPair, u32)> + '_ {
        self.co_occurrence.iter().map(|(pair, count)| (*pair, *count))
    }

    #[cfg(test)]
    pub(crate) fn pair_count(&self) -> usize {
        self.co_occurrence.len()
    }

    pub fn conflicts(&self) -> impl Iterator<Item = TagId> + '_ {
        self.conflicts.iter().copied()
    }

    /// Assemble a graph from raw parts, bypassing `build`'s consistency
    #[cfg(test)]
    pub(crate) fn from_parts(tags: Vec<Tag>, pairs: Vec<(TagPair, u32)>) -> Self {
        Self {
            tags: tags.into_iter().map(|t| (t.id, t)).collect(),
            co_occurrence: pairs.into_iter().collect(),
            ..Self::default()
        }
    }
}

/// Distinct tag ids across a question set, for cross-checking the graph
#[cfg(test)]
pub(crate) fn distinct_tag_ids(questions: &[Question]) -> std::collections::HashSet<TagId> {
    questions
        .iter()
        .flat_map(|q| q.tags.iter().map(|t| t.id))
        .collect()
}
