//! Newcomers Guide content tree ingestion.
//!
//! # Responsibility
//! - Read task and taxonomy files from a `<chapter>/<type>/<id>/` folder tree.
//! - Turn them into a `Store` with tagged tasks and a generated taxonomy map.
//!
//! # Invariants
//! - Files are processed in sorted path order, so output is deterministic.
//! - One task id never spans two chapters.
//! - Any malformed file aborts ingestion with the offending path.
//!
//! Expected layout:
//! `<root>/<chapter>/tasks/<task id>/<locale>.<title>.<ext>` for content and
//! `<root>/<chapter>/tasks/<task id>/taxonomy.txt` for tags.

use crate::model::taxonomy::TaxonomyError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod builder;
pub mod clean;
pub mod path;
pub mod pipeline;
pub mod read;
pub mod terms;

pub use pipeline::{load_guide, GuideContent};

pub type IngestResult<T> = Result<T, IngestError>;

/// Errors from reading and parsing a content tree.
#[derive(Debug)]
pub enum IngestError {
    /// Filesystem read failure.
    Io { path: PathBuf, source: std::io::Error },
    /// Path is not valid UTF-8.
    NonUtf8Path(PathBuf),
    /// Path has fewer than `<chapter>/<type>/<id>/<file>` components.
    PathTooShort(String),
    /// File name is not `<locale>.<title>.<ext>`.
    InvalidFileName(String),
    /// Same task id found under two chapters.
    ChapterConflict {
        task_id: String,
        first: String,
        second: String,
    },
    /// Malformed taxonomy file.
    Taxonomy { path: String, source: TaxonomyError },
}

impl Display for IngestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::NonUtf8Path(path) => write!(f, "{}: path is not valid UTF-8", path.display()),
            Self::PathTooShort(path) => write!(f, "{path}: path is too short"),
            Self::InvalidFileName(name) => write!(
                f,
                "{name}: Invalid file name, should be <language code>.<article name>.md"
            ),
            Self::ChapterConflict {
                task_id,
                first,
                second,
            } => write!(
                f,
                "{task_id}: don't use the same task id in different chapters ({first}, {second})"
            ),
            Self::Taxonomy { path, source } => write!(f, "{path}: {source}"),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Taxonomy { source, .. } => Some(source),
            Self::NonUtf8Path(_) => None,
            Self::PathTooShort(_) => None,
            Self::InvalidFileName(_) => None,
            Self::ChapterConflict { .. } => None,
        }
    }
}
