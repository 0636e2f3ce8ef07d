//! Loads a grouped JSON document collection and flattens it into a corpus.
//!
//! Expected shape: a top-level array of groups, each with a `group_id` and a
//! `documents` array. Every document gains its owning group's identifier
//! during flattening; group order and in-group document order are preserved.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Document, FieldName};

#[derive(Deserialize)]
struct RawGroup {
    group_id: String,
    documents: Vec<RawDocument>,
}

#[derive(Deserialize)]
struct RawDocument {
    question: String,
    text: String,
    section: String,
    #[serde(flatten)]
    extra: HashMap<FieldName, String>,
}

pub fn load(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
        _ => Error::Operation(e.to_string()),
    })?;
    let groups: Vec<RawGroup> =
        serde_json::from_str(&raw).map_err(|e| Error::MalformedInput(e.to_string()))?;

    let mut corpus = Vec::new();
    for group in groups {
        for doc in group.documents {
            corpus.push(Document {
                group_id: group.group_id.clone(),
                question: doc.question,
                text: doc.text,
                section: doc.section,
                extra: doc.extra,
            });
        }
    }
    Ok(corpus)
}
