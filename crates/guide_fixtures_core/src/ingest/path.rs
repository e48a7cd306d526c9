//! Content file path parsing.
//!
//! A content path ends in `<chapter>/<type>/<id>/<locale>.<title>.<ext>`.
//! The title is everything between the first and the last period of the
//! file name, so titles may contain periods of their own.

use crate::ingest::{IngestError, IngestResult};
use std::path::{is_separator, Path};

const MIN_PATH_COMPONENTS: usize = 5;

/// Folder-derived parts of a content path, shared by content and tag files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLocation {
    pub chapter: String,
    /// Content type folder, e.g. `tasks`.
    pub content_type: String,
    /// Content id folder; becomes the task id.
    pub id: String,
}

/// Parts of a content file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPath {
    pub chapter: String,
    pub content_type: String,
    pub id: String,
    pub locale: String,
    pub title: String,
}

/// Splits a path into chapter, type and id, ignoring the file name.
///
/// # Errors
/// - `NonUtf8Path` when the path is not valid UTF-8.
/// - `PathTooShort` when fewer than five separator-delimited parts exist.
pub fn parse_content_location(path: &Path) -> IngestResult<ContentLocation> {
    let parts = split_path(path)?;
    let length = parts.len();
    Ok(ContentLocation {
        chapter: parts[length - 4].to_string(),
        content_type: parts[length - 3].to_string(),
        id: parts[length - 2].to_string(),
    })
}

/// Splits a content path into chapter, type, id, locale and title.
///
/// # Errors
/// - Everything `parse_content_location` rejects.
/// - `InvalidFileName` when the name is not `<locale>.<title>.<ext>`.
pub fn parse_file_path(path: &Path) -> IngestResult<ParsedPath> {
    let location = parse_content_location(path)?;
    let parts = split_path(path)?;
    let (locale, title) = split_file_name(parts[parts.len() - 1])?;
    Ok(ParsedPath {
        chapter: location.chapter,
        content_type: location.content_type,
        id: location.id,
        locale: locale.to_string(),
        title: title.to_string(),
    })
}

fn split_path(path: &Path) -> IngestResult<Vec<&str>> {
    let text = path
        .to_str()
        .ok_or_else(|| IngestError::NonUtf8Path(path.to_path_buf()))?;
    let parts: Vec<&str> = text.split(is_separator).collect();
    if parts.len() < MIN_PATH_COMPONENTS {
        return Err(IngestError::PathTooShort(text.to_string()));
    }
    Ok(parts)
}

/// Splits `<locale>.<title>.<ext>` into locale and title.
fn split_file_name(name: &str) -> IngestResult<(&str, &str)> {
    let invalid = || IngestError::InvalidFileName(name.to_string());
    let first = name.find('.').ok_or_else(invalid)?;
    let last = name.rfind('.').ok_or_else(invalid)?;

    let too_few_periods = first == last;
    let no_locale = first == 0;
    let no_title = first + 1 == last;
    let no_extension = last == name.len() - 1;
    if too_few_periods || no_locale || no_title || no_extension {
        return Err(invalid());
    }
    Ok((&name[..first], &name[first + 1..last]))
}

#[cfg(test)]
mod tests {
    use super::{parse_content_location, parse_file_path};
    use crate::ingest::IngestError;
    use std::path::Path;

    #[test]
    fn extracts_all_parts() {
        let parsed = parse_file_path(Path::new(
            "some/path/chapter_6_education/articles/Elementary_school/fr.École_primaire.txt",
        ))
        .unwrap();
        assert_eq!(parsed.chapter, "chapter_6_education");
        assert_eq!(parsed.content_type, "articles");
        assert_eq!(parsed.id, "Elementary_school");
        assert_eq!(parsed.locale, "fr");
        assert_eq!(parsed.title, "École_primaire");
    }

    #[test]
    fn title_keeps_inner_periods() {
        let parsed =
            parse_file_path(Path::new("r/ch/tasks/id/en.Dr. Smith.md")).unwrap();
        assert_eq!(parsed.title, "Dr. Smith");
    }

    #[test]
    fn location_ignores_file_name_shape() {
        let location =
            parse_content_location(Path::new("g/ch1/tasks/Learn_english/taxonomy.txt")).unwrap();
        assert_eq!(location.chapter, "ch1");
        assert_eq!(location.content_type, "tasks");
        assert_eq!(location.id, "Learn_english");
    }

    #[test]
    fn rejects_short_path() {
        let err = parse_file_path(Path::new("tasks/id/en.Title.md")).unwrap_err();
        assert!(matches!(err, IngestError::PathTooShort(_)));
    }

    #[test]
    fn rejects_malformed_file_names() {
        for name in ["en.md", ".Title.md", "en..md", "en.Title.", "Title"] {
            let path = format!("r/ch/tasks/id/{name}");
            let err = parse_file_path(Path::new(&path)).unwrap_err();
            assert!(
                matches!(err, IngestError::InvalidFileName(_)),
                "expected invalid file name for {name}"
            );
        }
    }
}
