//! Task assembly from per-locale content files.

use crate::ingest::clean::clean_text;
use crate::ingest::path::{parse_file_path, ParsedPath};
use crate::ingest::read::{ContentFile, TASKS_FOLDER};
use crate::ingest::{IngestError, IngestResult};
use crate::model::task::{Task, TaskId, TaskMap};
use std::collections::BTreeMap;

/// Accumulates one task from its locale files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            task: Task::new(id),
        }
    }

    pub fn id(&self) -> &str {
        &self.task.id
    }

    pub fn chapter(&self) -> Option<&str> {
        self.task.chapter.as_deref()
    }

    pub fn set_chapter(&mut self, chapter: impl Into<String>) -> &mut Self {
        self.task.chapter = Some(chapter.into());
        self
    }

    pub fn set_title_in_locale(&mut self, locale: &str, title: impl Into<String>) -> &mut Self {
        self.task.title.insert(locale, title);
        self
    }

    pub fn set_description_in_locale(
        &mut self,
        locale: &str,
        description: impl Into<String>,
    ) -> &mut Self {
        self.task.description.insert(locale, description);
        self
    }

    /// Adds one locale file, keeping the task within a single chapter.
    pub fn add_locale_file(&mut self, parsed: &ParsedPath, description: String) -> IngestResult<()> {
        if let Some(existing) = self.chapter() {
            if existing != parsed.chapter {
                return Err(IngestError::ChapterConflict {
                    task_id: self.task.id.clone(),
                    first: existing.to_string(),
                    second: parsed.chapter.clone(),
                });
            }
        }
        self.set_chapter(parsed.chapter.as_str())
            .set_title_in_locale(&parsed.locale, parsed.title.as_str())
            .set_description_in_locale(&parsed.locale, description);
        Ok(())
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Builds the task map from task content files.
///
/// Files outside a `tasks` type folder are ignored.
pub fn parse_task_files(files: &[ContentFile]) -> IngestResult<TaskMap> {
    let mut builders: BTreeMap<TaskId, TaskBuilder> = BTreeMap::new();
    for file in files {
        let parsed = parse_file_path(&file.path)?;
        if parsed.content_type != TASKS_FOLDER {
            continue;
        }
        builders
            .entry(parsed.id.clone())
            .or_insert_with(|| TaskBuilder::new(parsed.id.as_str()))
            .add_locale_file(&parsed, clean_text(&file.content))?;
    }
    Ok(builders
        .into_iter()
        .map(|(id, builder)| (id, builder.build()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::parse_task_files;
    use crate::ingest::read::ContentFile;
    use crate::ingest::IngestError;
    use std::path::PathBuf;

    fn file(path: &str, content: &str) -> ContentFile {
        ContentFile {
            path: PathBuf::from(path),
            content: content.to_string(),
        }
    }

    #[test]
    fn merges_locales_into_one_task() {
        let tasks = parse_task_files(&[
            file("g/ch1/tasks/Learn_english/en.Learn english.md", "English\ntext"),
            file("g/ch1/tasks/Learn_english/fr.Apprendre l_anglais.md", "Texte"),
        ])
        .unwrap();

        let task = &tasks["Learn_english"];
        assert_eq!(task.id, "Learn_english");
        assert_eq!(task.chapter.as_deref(), Some("ch1"));
        assert_eq!(task.title.get("en"), Some("Learn english"));
        assert_eq!(task.title.get("fr"), Some("Apprendre l_anglais"));
        assert_eq!(task.description.get("en"), Some("English text"));
    }

    #[test]
    fn rejects_task_id_in_two_chapters() {
        let err = parse_task_files(&[
            file("g/ch1/tasks/Dup/en.Dup.md", "a"),
            file("g/ch2/tasks/Dup/fr.Dup.md", "b"),
        ])
        .unwrap_err();
        assert!(matches!(err, IngestError::ChapterConflict { ref task_id, .. } if task_id == "Dup"));
    }

    #[test]
    fn ignores_other_content_types() {
        let tasks = parse_task_files(&[file("g/ch1/articles/Schools/en.Schools.md", "x")]).unwrap();
        assert!(tasks.is_empty());
    }
}
