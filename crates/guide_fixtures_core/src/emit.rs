//! TypeScript fixture module emitters.
//!
//! # Responsibility
//! - Render a store's `taskMap` and `taxonomyMap` as client fixture modules.
//! - Write the modules into an output directory, after a validation pass.
//!
//! # Invariants
//! - JSON keys are sorted and indented with four spaces.
//! - Non-ASCII text is written as-is, never `\u`-escaped.
//! - `write_validated_fixtures` writes nothing for a store with violations.

use crate::model::locale::SupportedLocales;
use crate::model::store::Store;
use crate::validate::StoreValidationError;
use log::{info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

pub const TASKS_FIXTURE_FILE: &str = "tasks.ts";
pub const TAXONOMIES_FIXTURE_FILE: &str = "taxonomies.ts";

const TASKS_HEADER: &str = "// intended to be located at pathways-frontend/src/fixtures/tasks.ts\n\
\n\
import { Store } from './types/tasks';\n\
export { Id, Task, TaskUserSettings, TaskMap, TaskUserSettingsMap, TaskList, Store } from './types/tasks';\n\
\n\
export const buildTasksFixture = (): Store => {\n    return {\n        taskMap: ";
const TASKS_FOOTER: &str = "\n    }\n}";

const TAXONOMIES_HEADER: &str = "// intended to be located at pathways-frontend/src/fixtures/taxonomies.ts\n\
import { Store } from './types/taxonomies';\n\
\n\
export const buildTaxonomyFixture = (): Store => ({\n    taxonomyMap:     ";
const TAXONOMIES_FOOTER: &str = "\n});";

/// Fixture rendering or writing failure.
#[derive(Debug)]
pub enum EmitError {
    Json(serde_json::Error),
    Utf8(FromUtf8Error),
    Io { path: PathBuf, source: std::io::Error },
    /// Store breaks data-model invariants; nothing was written.
    Invalid(Vec<StoreValidationError>),
}

impl Display for EmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "failed to render fixture JSON: {err}"),
            Self::Utf8(err) => write!(f, "fixture JSON is not valid UTF-8: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to write fixture `{}`: {source}", path.display())
            }
            Self::Invalid(violations) => {
                write!(f, "store has {} violation(s)", violations.len())?;
                for violation in violations {
                    write!(f, "\n  {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl Error for EmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Utf8(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for EmitError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Renders the `buildTasksFixture` module.
pub fn render_tasks_fixture(store: &Store) -> Result<String, EmitError> {
    let json = to_sorted_json(&store.task_map)?;
    Ok(format!(
        "{TASKS_HEADER}{}{TASKS_FOOTER}",
        add_leading_spaces(8, &json)
    ))
}

/// Renders the `buildTaxonomyFixture` module.
pub fn render_taxonomy_fixture(store: &Store) -> Result<String, EmitError> {
    let json = to_sorted_json(&store.taxonomy_map)?;
    Ok(format!(
        "{TAXONOMIES_HEADER}{}{TAXONOMIES_FOOTER}",
        add_leading_spaces(4, &json)
    ))
}

/// Writes both fixture modules into `out_dir`, returning the written paths.
pub fn write_fixtures(store: &Store, out_dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
    fs::create_dir_all(out_dir).map_err(|source| EmitError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let outputs = [
        (TASKS_FIXTURE_FILE, render_tasks_fixture(store)?),
        (TAXONOMIES_FIXTURE_FILE, render_taxonomy_fixture(store)?),
    ];
    let mut written = Vec::with_capacity(outputs.len());
    for (name, content) in outputs {
        let path = out_dir.join(name);
        fs::write(&path, content).map_err(|source| EmitError::Io {
            path: path.clone(),
            source,
        })?;
        info!(
            "event=fixture_written module=emit status=ok path={}",
            path.display()
        );
        written.push(path);
    }
    Ok(written)
}

/// Validates `store` against `supported`, then writes both fixture modules.
///
/// # Errors
/// - `Invalid` with every violation when the store is not complete; no file
///   is created in that case.
/// - Anything `write_fixtures` returns.
pub fn write_validated_fixtures(
    store: &Store,
    supported: &SupportedLocales,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, EmitError> {
    let violations = store.violations(supported);
    if !violations.is_empty() {
        warn!(
            "event=fixture_write_skipped module=emit status=error violations={}",
            violations.len()
        );
        return Err(EmitError::Invalid(violations));
    }
    write_fixtures(store, out_dir)
}

/// Serializes with sorted object keys and four-space indentation.
pub fn to_sorted_json<T: Serialize>(value: &T) -> Result<String, EmitError> {
    // Round-trip through `Value` so struct fields are key-sorted too.
    let value: Value = serde_json::to_value(value)?;
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(EmitError::Utf8)
}

fn add_leading_spaces(count: usize, text: &str) -> String {
    let padding = " ".repeat(count);
    text.split('\n')
        .map(|line| format!("{padding}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{
        add_leading_spaces, render_taxonomy_fixture, to_sorted_json, write_fixtures,
        write_validated_fixtures, EmitError,
    };
    use crate::model::locale::SupportedLocales;
    use crate::model::store::Store;
    use crate::model::task::{task_map_from, Task};
    use crate::model::taxonomy::{TaxonomyDomain, TaxonomyIcon, TaxonomyMap};
    use crate::validate::{StoreValidationError, TextField};

    #[test]
    fn sorted_json_orders_struct_fields() {
        let task = crate::model::task::Task::new("id").with_locale("fr", "Titre", "Corps");
        let json = to_sorted_json(&task).unwrap();
        let description = json.find("\"description\"").unwrap();
        let id = json.find("\"id\"").unwrap();
        let title = json.find("\"title\"").unwrap();
        assert!(description < id && id < title);
        assert!(json.contains("\n    \"id\": \"id\""));
    }

    #[test]
    fn leading_spaces_apply_to_every_line() {
        assert_eq!(add_leading_spaces(2, "{\n}"), "  {\n  }");
    }

    #[test]
    fn taxonomy_module_shape() {
        let mut map = TaxonomyMap::new();
        map.entry(TaxonomyDomain::Group)
            .or_default()
            .insert("lgbtq2".to_string(), TaxonomyIcon::unknown());
        let rendered = render_taxonomy_fixture(&Store::with_taxonomies(map)).unwrap();
        assert!(rendered.contains("export const buildTaxonomyFixture = (): Store => ({"));
        assert!(rendered.contains("taxonomyMap:         {\n        \"group\": {"));
        assert!(rendered.ends_with("    }\n});"));
    }

    #[test]
    fn write_into_regular_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();

        let err = write_fixtures(&Store::default(), &blocker).unwrap_err();
        match err {
            EmitError::Io { path, .. } => assert_eq!(path, blocker),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_store_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");
        let store = Store::with_tasks(task_map_from([
            Task::new("Only english").with_locale("en", "Only english", "Body")
        ]));

        let err = write_validated_fixtures(&store, &SupportedLocales::default(), &out_dir)
            .unwrap_err();
        match err {
            EmitError::Invalid(violations) => assert_eq!(
                violations[0],
                StoreValidationError::MissingLocale {
                    task_id: "Only english".to_string(),
                    field: TextField::Title,
                    locale: "fr".to_string(),
                }
            ),
            other => panic!("expected invalid store, got {other:?}"),
        }
        assert!(!out_dir.exists());
    }
}
