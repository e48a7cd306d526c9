//! End-to-end content tree ingestion.

use crate::fixtures::taxonomies::generated_explore_base;
use crate::ingest::builder::parse_task_files;
use crate::ingest::read::{read_task_files, read_taxonomy_files, TASKS_FOLDER};
use crate::ingest::terms::{parse_taxonomy_files, TaxonomyTermReference};
use crate::ingest::IngestResult;
use crate::model::store::Store;
use crate::model::task::TaskMap;
use crate::model::taxonomy::{TaxonomyDomain, TaxonomyIcon, TaxonomyMap};
use log::{debug, info};
use std::path::Path;

/// Store and tag references read from one content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideContent {
    /// Tagged tasks plus the taxonomy map generated from the tags.
    pub store: Store,
    pub references: Vec<TaxonomyTermReference>,
}

/// Reads and assembles the content tree rooted at `root`.
pub fn load_guide(root: &Path) -> IngestResult<GuideContent> {
    info!(
        "event=ingest_start module=ingest status=ok root={}",
        root.display()
    );

    let taxonomy_files = read_taxonomy_files(root)?;
    let references = parse_taxonomy_files(&taxonomy_files)?;

    let task_files = read_task_files(root)?;
    let mut task_map = parse_task_files(&task_files)?;
    attach_taxonomy_references(&references, &mut task_map);

    let taxonomy_map = taxonomy_map_from_references(&references);
    info!(
        "event=ingest_done module=ingest status=ok task_files={} taxonomy_files={} tasks={} references={}",
        task_files.len(),
        taxonomy_files.len(),
        task_map.len(),
        references.len()
    );

    Ok(GuideContent {
        store: Store {
            task_map,
            taxonomy_map,
        },
        references,
    })
}

/// Appends each task reference's term to the task it names.
///
/// References from other content types, and to unknown task ids, are skipped.
pub fn attach_taxonomy_references(references: &[TaxonomyTermReference], tasks: &mut TaskMap) {
    for reference in references {
        if reference.content_type != TASKS_FOLDER {
            continue;
        }
        match tasks.get_mut(&reference.content_id) {
            Some(task) => task.taxonomy_terms.push(reference.term.clone()),
            None => debug!(
                "event=reference_skipped module=ingest status=ok content_id={} term={}",
                reference.content_id, reference.term
            ),
        }
    }
}

/// Builds the generated taxonomy map: explore base plus every tagged term.
///
/// Tagged terms without an icon get `"unknown"`; existing icons are kept.
pub fn taxonomy_map_from_references(references: &[TaxonomyTermReference]) -> TaxonomyMap {
    let mut map = TaxonomyMap::new();
    map.insert(TaxonomyDomain::Explore, generated_explore_base());
    for reference in references {
        map.entry(reference.term.taxonomy_id)
            .or_default()
            .entry(reference.term.taxonomy_term_id.clone())
            .or_insert_with(TaxonomyIcon::unknown);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::{attach_taxonomy_references, taxonomy_map_from_references};
    use crate::ingest::terms::TaxonomyTermReference;
    use crate::model::task::{task_map_from, Task};
    use crate::model::taxonomy::{TaxonomyDomain, TaxonomyTermRef};

    fn reference(domain: TaxonomyDomain, term: &str, content_id: &str) -> TaxonomyTermReference {
        typed_reference(domain, term, "tasks", content_id)
    }

    fn typed_reference(
        domain: TaxonomyDomain,
        term: &str,
        content_type: &str,
        content_id: &str,
    ) -> TaxonomyTermReference {
        TaxonomyTermReference {
            term: TaxonomyTermRef::new(domain, term),
            content_type: content_type.to_string(),
            content_id: content_id.to_string(),
        }
    }

    #[test]
    fn attaches_terms_in_reference_order() {
        let mut tasks = task_map_from([Task::new("a")]);
        attach_taxonomy_references(
            &[
                reference(TaxonomyDomain::Explore, "education", "a"),
                reference(TaxonomyDomain::Group, "women", "missing"),
                reference(TaxonomyDomain::Age, "over_65", "a"),
            ],
            &mut tasks,
        );
        let terms: Vec<String> = tasks["a"]
            .taxonomy_terms
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(terms, vec!["explore:education", "age:over_65"]);
    }

    #[test]
    fn skips_references_from_other_content_types() {
        let mut tasks = task_map_from([Task::new("a")]);
        attach_taxonomy_references(
            &[typed_reference(TaxonomyDomain::Explore, "legal", "articles", "a")],
            &mut tasks,
        );
        assert!(tasks["a"].taxonomy_terms.is_empty());
    }

    #[test]
    fn generated_map_keeps_base_icons_and_adds_unknown_terms() {
        let map = taxonomy_map_from_references(&[
            reference(TaxonomyDomain::Explore, "education", "a"),
            reference(TaxonomyDomain::Explore, "legal", "a"),
            reference(TaxonomyDomain::Group, "low_income", "b"),
        ]);
        let explore = &map[&TaxonomyDomain::Explore];
        assert_eq!(explore["education"].icon, "book-open-variant");
        assert!(explore["legal"].is_unknown());
        assert!(map[&TaxonomyDomain::Group]["low_income"].is_unknown());
    }
}
