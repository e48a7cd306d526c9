//! Store schema validation pass.
//!
//! # Responsibility
//! - Check a `Store` against the data-model invariants in one pass.
//! - Report every violation, not only the first one.
//!
//! # Invariants
//! - Reported violations are sorted, so output is stable across runs.
//! - Validation never mutates the store.

use crate::model::locale::SupportedLocales;
use crate::model::store::Store;
use crate::model::taxonomy::TaxonomyDomain;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Localized field of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TextField {
    Title,
    Description,
}

impl TextField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

/// One data-model violation found in a store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum StoreValidationError {
    /// Task key is blank after trim.
    EmptyTaskId,
    /// Map key and `Task::id` differ.
    IdMismatch { key: String, id: String },
    /// Required locale is absent or blank in one field.
    MissingLocale {
        task_id: String,
        field: TextField,
        locale: String,
    },
    /// Category code is blank after trim.
    EmptyCategoryCode { domain: TaxonomyDomain },
    /// Category record has a blank icon.
    EmptyIcon {
        domain: TaxonomyDomain,
        code: String,
    },
}

impl Display for StoreValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskId => write!(f, "task id must not be empty"),
            Self::IdMismatch { key, id } => {
                write!(f, "task stored under `{key}` has id `{id}`")
            }
            Self::MissingLocale {
                task_id,
                field,
                locale,
            } => write!(
                f,
                "task `{task_id}` is missing `{locale}` {}",
                field.as_str()
            ),
            Self::EmptyCategoryCode { domain } => {
                write!(f, "taxonomy `{domain}` contains an empty category code")
            }
            Self::EmptyIcon { domain, code } => {
                write!(f, "taxonomy `{domain}` category `{code}` has no icon")
            }
        }
    }
}

impl Error for StoreValidationError {}

impl Store {
    /// Returns every invariant violation, sorted. Empty means valid.
    pub fn violations(&self, supported: &SupportedLocales) -> Vec<StoreValidationError> {
        let mut violations = Vec::new();

        for (key, task) in &self.task_map {
            if key.trim().is_empty() {
                violations.push(StoreValidationError::EmptyTaskId);
            }
            if key != &task.id {
                violations.push(StoreValidationError::IdMismatch {
                    key: key.clone(),
                    id: task.id.clone(),
                });
            }
            for (field, text) in [
                (TextField::Title, &task.title),
                (TextField::Description, &task.description),
            ] {
                for locale in text.missing_locales(supported) {
                    violations.push(StoreValidationError::MissingLocale {
                        task_id: key.clone(),
                        field,
                        locale: locale.to_string(),
                    });
                }
            }
        }

        for (domain, categories) in &self.taxonomy_map {
            for (code, record) in categories {
                if code.trim().is_empty() {
                    violations.push(StoreValidationError::EmptyCategoryCode { domain: *domain });
                }
                if record.icon.trim().is_empty() {
                    violations.push(StoreValidationError::EmptyIcon {
                        domain: *domain,
                        code: code.clone(),
                    });
                }
            }
        }

        violations.sort();
        violations.dedup();
        if !violations.is_empty() {
            warn!(
                "event=store_validated module=validate status=error violations={}",
                violations.len()
            );
        }
        violations
    }

    /// Validates the store, returning the first violation as an error.
    pub fn validate(&self, supported: &SupportedLocales) -> Result<(), StoreValidationError> {
        match self.violations(supported).into_iter().next() {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}
