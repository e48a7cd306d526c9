//! Task domain model.
//!
//! # Responsibility
//! - Define one unit of localized informational content.
//!
//! # Invariants
//! - `id` is stable and equals the key the task is stored under.
//! - `title` and `description` cover the same locale set.

use crate::model::locale::LocalizedText;
use crate::model::taxonomy::TaxonomyTermRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable task identifier; also the `TaskMap` key.
pub type TaskId = String;

/// Localized informational content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    /// Source chapter folder. Only set for tasks read from a content tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// Taxonomy terms the task is tagged with, in tagging order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxonomy_terms: Vec<TaxonomyTermRef>,
}

impl Task {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            title: LocalizedText::new(),
            description: LocalizedText::new(),
            chapter: None,
            taxonomy_terms: Vec::new(),
        }
    }

    /// Sets title and description for one locale.
    pub fn with_locale(
        mut self,
        locale: &str,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.title.insert(locale, title);
        self.description.insert(locale, description);
        self
    }
}

/// Task id -> task. Ordered so emitted fixtures are deterministic.
pub type TaskMap = BTreeMap<TaskId, Task>;

/// Inserts tasks keyed by their own id.
pub fn task_map_from<I: IntoIterator<Item = Task>>(tasks: I) -> TaskMap {
    tasks
        .into_iter()
        .map(|task| (task.id.clone(), task))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{task_map_from, Task};
    use crate::model::taxonomy::{TaxonomyDomain, TaxonomyTermRef};

    #[test]
    fn optional_fields_are_omitted_from_wire_shape() {
        let task = Task::new("Using a lawyer").with_locale("en", "Using a lawyer", "body");
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("chapter").is_none());
        assert!(json.get("taxonomyTerms").is_none());
        assert_eq!(json["title"]["en"], "Using a lawyer");
    }

    #[test]
    fn taxonomy_terms_use_camel_case_fields() {
        let mut task = Task::new("t").with_locale("en", "T", "D");
        task.taxonomy_terms
            .push(TaxonomyTermRef::new(TaxonomyDomain::Group, "low_income"));
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["taxonomyTerms"][0]["taxonomyId"], "group");
        assert_eq!(json["taxonomyTerms"][0]["taxonomyTermId"], "low_income");
    }

    #[test]
    fn task_map_is_keyed_by_id() {
        let map = task_map_from([Task::new("b"), Task::new("a")]);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(map.iter().all(|(key, task)| key == &task.id));
    }
}
