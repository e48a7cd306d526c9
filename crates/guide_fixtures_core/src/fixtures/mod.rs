//! Built-in seed fixtures.
//!
//! # Responsibility
//! - Provide the task and taxonomy store slices used by tests and demos.
//! - Expose each fixture both as a shared read-only view and as an owned copy.
//!
//! # Invariants
//! - Fixtures are built at most once per process and never mutated.
//! - `build_*` functions return values that share nothing with each other.

pub mod tasks;
pub mod taxonomies;

use crate::model::store::Store;
use taxonomies::TaxonomyVariant;

/// Returns the task fixture merged with one taxonomy variant.
pub fn build_combined_fixture(variant: TaxonomyVariant) -> Store {
    tasks::build_tasks_fixture().merge(taxonomies::build_taxonomy_fixture_variant(variant))
}
