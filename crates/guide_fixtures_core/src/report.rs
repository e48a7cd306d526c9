//! Human-readable content reports for fixture authors.
//!
//! Both reports are written to any `io::Write`, so the CLI can print them and
//! tests can capture them.

use crate::model::task::{Task, TaskMap};
use std::io::{self, Write};

const NO_TAXONOMY_TERMS: &str = "---------------- NO TAXONOMY TERMS IN THIS ITEM ----------------";

/// Lists the taxonomy terms of every task.
pub fn write_taxonomy_report<W: Write>(out: &mut W, tasks: &TaskMap) -> io::Result<()> {
    writeln!(out, "\nTaxonomy terms for tasks\n")?;
    for (id, task) in tasks {
        writeln!(out, "{id:<50} TaxTerms: {}", format_taxonomy_terms(task))?;
    }
    Ok(())
}

/// Lists the locales of every task, grouped by chapter.
pub fn write_locale_report<W: Write>(out: &mut W, tasks: &TaskMap) -> io::Result<()> {
    writeln!(out, "\nLocales for tasks\n")?;

    let mut lines: Vec<(&str, &str, String)> = tasks
        .iter()
        .map(|(id, task)| {
            let chapter = task.chapter.as_deref().unwrap_or("");
            let line = format!("{id:<50} Locales: {}", format_locales(task));
            (chapter, task.id.as_str(), line)
        })
        .collect();
    lines.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let mut current_chapter: Option<&str> = None;
    for (chapter, _, line) in &lines {
        if current_chapter != Some(*chapter) {
            writeln!(out, "\nChapter {chapter}:\n")?;
            current_chapter = Some(*chapter);
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Formats terms as `domain:term, domain:term` or a warning banner.
pub fn format_taxonomy_terms(task: &Task) -> String {
    if task.taxonomy_terms.is_empty() {
        return NO_TAXONOMY_TERMS.to_string();
    }
    task.taxonomy_terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the locale list, flagging title/description mismatches.
pub fn format_locales(task: &Task) -> String {
    let title: Vec<&str> = task.title.locales().collect();
    let description: Vec<&str> = task.description.locales().collect();
    if title == description {
        return title.join(", ");
    }
    format!(
        "Inconsistent: title = {}, description = {}",
        title.join(", "),
        description.join(", ")
    )
}
