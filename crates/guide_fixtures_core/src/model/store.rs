//! Partial application store produced by fixtures and ingestion.
//!
//! # Responsibility
//! - Carry the `taskMap` and `taxonomyMap` slices of the application store.
//! - Merge slices produced by independent builders.
//!
//! # Invariants
//! - Slices are plain owned values; cloning never aliases another store.
//! - Empty slices are omitted from the serialized shape.

use crate::model::task::{Task, TaskMap};
use crate::model::taxonomy::{CategoryMap, TaxonomyDomain, TaxonomyIcon, TaxonomyMap};
use serde::{Deserialize, Serialize};

/// Partial application store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(default, skip_serializing_if = "TaskMap::is_empty")]
    pub task_map: TaskMap,
    #[serde(default, skip_serializing_if = "TaxonomyMap::is_empty")]
    pub taxonomy_map: TaxonomyMap,
}

impl Store {
    pub fn with_tasks(task_map: TaskMap) -> Self {
        Self {
            task_map,
            taxonomy_map: TaxonomyMap::new(),
        }
    }

    pub fn with_taxonomies(taxonomy_map: TaxonomyMap) -> Self {
        Self {
            task_map: TaskMap::new(),
            taxonomy_map,
        }
    }

    /// Merges `other` into `self`.
    ///
    /// Tasks merge shallowly: a task id present in both keeps `other`'s task.
    /// Taxonomies merge per domain, then per code: `other`'s icon wins.
    pub fn merge(mut self, other: Store) -> Store {
        self.task_map.extend(other.task_map);
        for (domain, categories) in other.taxonomy_map {
            self.taxonomy_map
                .entry(domain)
                .or_default()
                .extend(categories);
        }
        self
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.task_map.get(id)
    }

    pub fn categories(&self, domain: TaxonomyDomain) -> Option<&CategoryMap> {
        self.taxonomy_map.get(&domain)
    }

    pub fn icon(&self, domain: TaxonomyDomain, code: &str) -> Option<&TaxonomyIcon> {
        self.categories(domain).and_then(|categories| categories.get(code))
    }

    pub fn is_empty(&self) -> bool {
        self.task_map.is_empty() && self.taxonomy_map.is_empty()
    }
}
