use guide_fixtures_core::{
    load_guide, render_tasks_fixture, write_fixtures, write_validated_fixtures, EmitError,
    IngestError, StoreValidationError, SupportedLocales, TaxonomyDomain,
};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_guide(root: &Path) {
    write(
        root,
        "guide/chapter_1/tasks/Learn_english/en.Learn english.md",
        "There are many classes\nto help adults.\n\nSee http://bcteal.org/esldirectory",
    );
    write(
        root,
        "guide/chapter_1/tasks/Learn_english/fr.Apprendre l_anglais.md",
        "Il existe de nombreux cours.",
    );
    write(
        root,
        "guide/chapter_1/tasks/Learn_english/taxonomy.txt",
        "explore:education, group:low_income\n",
    );
    write(
        root,
        "guide/chapter_2/tasks/Using_a_lawyer/en.Using a lawyer.md",
        "If you have a legal problem.",
    );
    write(
        root,
        "guide/chapter_2/tasks/Using_a_lawyer/fr.Avoir recours à un avocat.md",
        "En cas de problème juridique.",
    );
    write(
        root,
        "guide/chapter_2/articles/Courts/en.Courts.md",
        "Not a task.",
    );
}

#[test]
fn loads_tasks_and_taxonomies_from_folder_tree() {
    let dir = tempfile::tempdir().unwrap();
    sample_guide(dir.path());

    let content = load_guide(&dir.path().join("guide")).unwrap();
    let store = &content.store;

    assert_eq!(store.task_map.len(), 2);
    let learn = store.task("Learn_english").unwrap();
    assert_eq!(learn.chapter.as_deref(), Some("chapter_1"));
    assert_eq!(learn.title.get("fr"), Some("Apprendre l_anglais"));
    assert_eq!(
        learn.description.get("en"),
        Some("There are many classes to help adults.\n\nSee [bcteal.org](http://bcteal.org/esldirectory)")
    );
    assert_eq!(learn.taxonomy_terms.len(), 2);
    assert!(store.task("Using_a_lawyer").unwrap().taxonomy_terms.is_empty());

    assert_eq!(content.references.len(), 2);
    assert_eq!(
        store.icon(TaxonomyDomain::Explore, "education").unwrap().icon,
        "book-open-variant"
    );
    assert!(store
        .icon(TaxonomyDomain::Group, "low_income")
        .unwrap()
        .is_unknown());
    assert!(store.violations(&SupportedLocales::default()).is_empty());
}

#[test]
fn writes_both_fixture_modules() {
    let dir = tempfile::tempdir().unwrap();
    sample_guide(dir.path());
    let content = load_guide(&dir.path().join("guide")).unwrap();

    let out_dir = dir.path().join("out");
    let written = write_fixtures(&content.store, &out_dir).unwrap();
    assert_eq!(written.len(), 2);

    let tasks = fs::read_to_string(out_dir.join("tasks.ts")).unwrap();
    assert!(tasks.starts_with("// intended to be located at pathways-frontend/src/fixtures/tasks.ts"));
    assert!(tasks.contains("        taskMap:         {\n            \"Learn_english\": {"));
    assert!(tasks.contains("\"fr\": \"Avoir recours à un avocat\""));
    assert!(tasks.contains("\"taxonomyId\": \"explore\""));
    assert_eq!(tasks, render_tasks_fixture(&content.store).unwrap());

    let taxonomies = fs::read_to_string(out_dir.join("taxonomies.ts")).unwrap();
    assert!(taxonomies.contains("\"settlingIn\": {"));
    assert!(taxonomies.contains("\"low_income\": {"));
}

#[test]
fn rejects_unknown_explore_term_with_path() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "guide/chapter_1/tasks/Cooking/taxonomy.txt",
        "explore:cooking",
    );
    let err = load_guide(&dir.path().join("guide")).unwrap_err();
    assert!(matches!(err, IngestError::Taxonomy { .. }));
    let message = err.to_string();
    assert!(message.contains("taxonomy.txt"));
    assert!(message.contains("Invalid explore taxonomy term \"cooking\""));
}

#[test]
fn missing_root_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_guide(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn single_locale_guide_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "guide/ch1/tasks/Only_english/en.Only english.md",
        "English only.",
    );
    let content = load_guide(&dir.path().join("guide")).unwrap();

    let out_dir = dir.path().join("out");
    let err = write_validated_fixtures(&content.store, &SupportedLocales::default(), &out_dir)
        .unwrap_err();
    let violations = match err {
        EmitError::Invalid(violations) => violations,
        other => panic!("expected invalid store, got {other:?}"),
    };
    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|violation| matches!(
        violation,
        StoreValidationError::MissingLocale { task_id, locale, .. }
            if task_id == "Only_english" && locale == "fr"
    )));
    assert!(!out_dir.join("tasks.ts").exists());
    assert!(!out_dir.join("taxonomies.ts").exists());
}

#[test]
fn configured_locales_drive_generate_validation() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "guide/ch1/tasks/Only_english/en.Only english.md",
        "English only.",
    );
    let content = load_guide(&dir.path().join("guide")).unwrap();

    let english_only = SupportedLocales::new(["en"]).unwrap();
    let written =
        write_validated_fixtures(&content.store, &english_only, &dir.path().join("out")).unwrap();
    assert_eq!(written.len(), 2);
}

#[test]
fn article_tags_do_not_attach_to_tasks() {
    let dir = tempfile::tempdir().unwrap();
    sample_guide(dir.path());
    write(
        dir.path(),
        "guide/chapter_2/articles/Using_a_lawyer/taxonomy.txt",
        "explore:legal",
    );

    let content = load_guide(&dir.path().join("guide")).unwrap();
    let lawyer = content.store.task("Using_a_lawyer").unwrap();
    assert!(lawyer.taxonomy_terms.is_empty());
    assert!(content
        .store
        .icon(TaxonomyDomain::Explore, "legal")
        .unwrap()
        .is_unknown());
}
