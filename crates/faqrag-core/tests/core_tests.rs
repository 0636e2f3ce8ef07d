use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

use faqrag_core::error::Error;
use faqrag_core::loader;
use faqrag_core::types::{Document, SearchQuery, DEFAULT_LIMIT};

fn write_collection(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn load_flattens_groups_preserving_order() {
    let tmp = TempDir::new().unwrap();
    let path = write_collection(
        &tmp,
        "docs.json",
        r#"[
            {"group_id": "g1", "documents": [
                {"question": "q1", "text": "a1", "section": "s1"},
                {"question": "q2", "text": "a2", "section": "s1"}
            ]},
            {"group_id": "g2", "documents": [
                {"question": "q3", "text": "a3", "section": "s2"}
            ]}
        ]"#,
    );

    let corpus = loader::load(&path).expect("load");

    assert_eq!(corpus.len(), 3, "one record per document across all groups");
    let questions: Vec<&str> = corpus.iter().map(|d| d.question.as_str()).collect();
    assert_eq!(questions, vec!["q1", "q2", "q3"]);
}

#[test]
fn load_tags_every_document_with_its_group() {
    let tmp = TempDir::new().unwrap();
    let path = write_collection(
        &tmp,
        "docs.json",
        r#"[
            {"group_id": "alpha", "documents": [{"question": "q", "text": "a", "section": "s"}]},
            {"group_id": "beta", "documents": [{"question": "q", "text": "a", "section": "s"}]}
        ]"#,
    );

    let corpus = loader::load(&path).expect("load");

    assert_eq!(corpus[0].group_id, "alpha");
    assert_eq!(corpus[1].group_id, "beta");
}

#[test]
fn load_carries_extra_fields_through() {
    let tmp = TempDir::new().unwrap();
    let path = write_collection(
        &tmp,
        "docs.json",
        r#"[{"group_id": "g", "documents": [
            {"question": "q", "text": "a", "section": "s", "author": "ada"}
        ]}]"#,
    );

    let corpus = loader::load(&path).expect("load");

    assert_eq!(corpus[0].field("author"), Some("ada"));
    assert_eq!(corpus[0].field("group_id"), Some("g"));
    assert_eq!(corpus[0].field("missing"), None);
}

#[test]
fn load_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = loader::load(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "got: {err}");
}

#[test]
fn load_rejects_invalid_json() {
    let tmp = TempDir::new().unwrap();
    let path = write_collection(&tmp, "docs.json", "not json at all");
    let err = loader::load(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)), "got: {err}");
}

#[test]
fn load_rejects_document_missing_required_field() {
    let tmp = TempDir::new().unwrap();
    let path = write_collection(
        &tmp,
        "docs.json",
        r#"[{"group_id": "g", "documents": [{"question": "q", "section": "s"}]}]"#,
    );
    let err = loader::load(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedInput(_)), "got: {err}");
}

#[test]
fn search_query_defaults() {
    let query = SearchQuery::new("how do I enroll");
    assert_eq!(query.limit, DEFAULT_LIMIT);
    assert!(query.boosts.is_empty());
    assert!(query.filters.is_empty());

    let default = SearchQuery::default();
    assert_eq!(default.text, "");
    assert_eq!(default.limit, DEFAULT_LIMIT);
}

#[test]
fn document_field_prefers_declared_over_extra() {
    let mut extra = HashMap::new();
    extra.insert("question".to_string(), "shadowed".to_string());
    let doc = Document {
        group_id: "g".to_string(),
        question: "real".to_string(),
        text: "a".to_string(),
        section: "s".to_string(),
        extra,
    };
    assert_eq!(doc.field("question"), Some("real"));
}
