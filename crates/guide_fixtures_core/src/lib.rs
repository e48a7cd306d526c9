//! Localized content store model and Newcomers Guide fixtures.
//! This crate is the single source of truth for fixture data invariants.

pub mod config;
pub mod emit;
pub mod fixtures;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod report;
pub mod taxonomy;
pub mod validate;

pub use config::{ConfigError, FixtureConfig};
pub use emit::{
    render_tasks_fixture, render_taxonomy_fixture, write_fixtures, write_validated_fixtures,
    EmitError,
};
pub use fixtures::build_combined_fixture;
pub use fixtures::tasks::{build_tasks_fixture, tasks_fixture};
pub use fixtures::taxonomies::{
    build_taxonomy_fixture, build_taxonomy_fixture_variant, taxonomy_fixture, TaxonomyVariant,
};
pub use ingest::{load_guide, GuideContent, IngestError, IngestResult};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::locale::{LocaleCode, LocaleError, LocalizedText, SupportedLocales};
pub use model::store::Store;
pub use model::task::{Task, TaskId, TaskMap};
pub use model::taxonomy::{
    CategoryMap, TaxonomyDomain, TaxonomyError, TaxonomyIcon, TaxonomyMap, TaxonomyTermRef,
    UNKNOWN_ICON,
};
pub use taxonomy::drift::{explore_key_drift, ExploreKeyDrift};
pub use taxonomy::tree::{TaxonomyNode, TaxonomyTree, TreeError};
pub use validate::{StoreValidationError, TextField};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
