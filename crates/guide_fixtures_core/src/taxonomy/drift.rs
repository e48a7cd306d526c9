//! Explore key drift between two taxonomy fixtures.
//!
//! Two fixtures that describe the same content should agree on the explore
//! key set. This check reports where they do not.

use crate::model::store::Store;
use crate::model::taxonomy::TaxonomyDomain;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

/// Explore key differences between a left and a right store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreKeyDrift {
    /// Keys present only on the left.
    pub only_left: Vec<String>,
    /// Keys present only on the right.
    pub only_right: Vec<String>,
    /// `(left, right)` keys that differ only by letter case.
    pub case_collisions: Vec<(String, String)>,
}

impl ExploreKeyDrift {
    pub fn is_consistent(&self) -> bool {
        self.only_left.is_empty() && self.only_right.is_empty()
    }
}

impl Display for ExploreKeyDrift {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_consistent() {
            return writeln!(f, "explore keys are consistent");
        }
        writeln!(f, "only in left:  {}", self.only_left.join(", "))?;
        writeln!(f, "only in right: {}", self.only_right.join(", "))?;
        let collisions: Vec<String> = self
            .case_collisions
            .iter()
            .map(|(left, right)| format!("{left}/{right}"))
            .collect();
        writeln!(f, "case only:     {}", collisions.join(", "))
    }
}

/// Compares the explore key sets of two stores.
pub fn explore_key_drift(left: &Store, right: &Store) -> ExploreKeyDrift {
    let keys = |store: &Store| -> BTreeSet<String> {
        store
            .categories(TaxonomyDomain::Explore)
            .map(|categories| categories.keys().cloned().collect())
            .unwrap_or_default()
    };
    let left_keys = keys(left);
    let right_keys = keys(right);

    let only_left: Vec<String> = left_keys.difference(&right_keys).cloned().collect();
    let only_right: Vec<String> = right_keys.difference(&left_keys).cloned().collect();

    let right_by_lowercase: BTreeMap<String, &String> = only_right
        .iter()
        .map(|key| (key.to_lowercase(), key))
        .collect();
    let case_collisions = only_left
        .iter()
        .filter_map(|key| {
            right_by_lowercase
                .get(&key.to_lowercase())
                .map(|right| (key.clone(), (*right).clone()))
        })
        .collect();

    ExploreKeyDrift {
        only_left,
        only_right,
        case_collisions,
    }
}
