//! Content tree file discovery.

use crate::ingest::{IngestError, IngestResult};
use std::fs;
use std::path::{Path, PathBuf};

/// File name reserved for taxonomy tags.
pub const TAXONOMY_FILE_NAME: &str = "taxonomy.txt";

/// Folder name holding task content.
pub const TASKS_FOLDER: &str = "tasks";

/// One file read from the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    pub path: PathBuf,
    pub content: String,
}

/// Reads every task content file below `root`, sorted by path.
pub fn read_task_files(root: &Path) -> IngestResult<Vec<ContentFile>> {
    read_matching(root, is_task_file)
}

/// Reads every taxonomy file below `root`, sorted by path.
pub fn read_taxonomy_files(root: &Path) -> IngestResult<Vec<ContentFile>> {
    read_matching(root, is_taxonomy_file)
}

pub fn is_taxonomy_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name == TAXONOMY_FILE_NAME)
        .unwrap_or(false)
}

/// A task file sits below a `tasks` folder and is not a taxonomy file.
pub fn is_task_file(path: &Path) -> bool {
    let in_tasks_folder = path
        .parent()
        .map(|parent| parent.components().any(|c| c.as_os_str() == TASKS_FOLDER))
        .unwrap_or(false);
    in_tasks_folder && !is_taxonomy_file(path)
}

fn read_matching(root: &Path, accept: fn(&Path) -> bool) -> IngestResult<Vec<ContentFile>> {
    let mut paths = Vec::new();
    collect_files(root, &mut paths)?;
    paths.sort();

    paths
        .into_iter()
        .filter(|path| accept(path))
        .map(|path| {
            let content = fs::read_to_string(&path).map_err(|source| IngestError::Io {
                path: path.clone(),
                source,
            })?;
            Ok(ContentFile { path, content })
        })
        .collect()
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> IngestResult<()> {
    let entries = fs::read_dir(dir).map_err(|source| IngestError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
