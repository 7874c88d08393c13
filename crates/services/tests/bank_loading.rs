use std::fs;

use quiz_core::QuestionBank;
use services::bank::MANIFEST_FILE;
use services::{BankError, SubjectCatalog};

const FLAT: &str = r#"[{ "question": "Q", "options": ["a", "b"], "answer": "A" }]"#;
const GROUPED: &str = r#"{ "Intro": [{ "question": "Q", "options": ["a"], "answer": "a" }] }"#;

#[test]
fn directory_scan_uses_file_stems_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("zeta.json"), FLAT).unwrap();
    fs::write(dir.path().join("alpha.json"), GROUPED).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let catalog = SubjectCatalog::from_dir(dir.path()).unwrap();
    let ids: Vec<_> = catalog.subjects().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["alpha", "zeta"]);
    assert!(matches!(catalog.get("alpha").unwrap().bank, QuestionBank::Grouped(_)));
    assert_eq!(catalog.get("zeta").unwrap().title, "zeta");
}

#[test]
fn manifest_controls_order_and_titles() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.json"), FLAT).unwrap();
    fs::write(dir.path().join("a.json"), FLAT).unwrap();
    fs::write(
        dir.path().join(MANIFEST_FILE),
        r#"[
            { "id": "SECOND", "title": "Second Subject", "file": "b.json" },
            { "id": "FIRST", "file": "a.json" }
        ]"#,
    )
    .unwrap();

    let catalog = SubjectCatalog::from_dir(dir.path()).unwrap();
    let ids: Vec<_> = catalog.subjects().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["SECOND", "FIRST"]);
    assert_eq!(catalog.get("SECOND").unwrap().title, "Second Subject");
    assert_eq!(catalog.get("FIRST").unwrap().title, "FIRST");
}

#[test]
fn broken_file_is_named_in_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let err = SubjectCatalog::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, BankError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SubjectCatalog::from_dir(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, BankError::Io { .. }));
}
