//! Domain types shared by the loader, index, and pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type FieldName = String;

/// Default number of results returned by a query.
pub const DEFAULT_LIMIT: usize = 5;

/// A single FAQ record, flattened out of its owning group.
///
/// - `group_id`: identifier of the group the record was loaded from
/// - `question`/`text`/`section`: the fields the pipeline interprets
/// - `extra`: pass-through fields carried but not interpreted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub group_id: String,
    pub question: String,
    pub text: String,
    pub section: String,
    #[serde(flatten)]
    pub extra: HashMap<FieldName, String>,
}

impl Document {
    /// Resolve a field name to its value: declared fields first, then `extra`.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "group_id" => Some(&self.group_id),
            "question" => Some(&self.question),
            "text" => Some(&self.text),
            "section" => Some(&self.section),
            _ => self.extra.get(name).map(String::as_str),
        }
    }
}

/// A retrieval request against a fitted index.
///
/// `boosts` weight declared text fields (1.0 when unlisted); `filters`
/// restrict results to exact keyword-field matches. Names that are not part
/// of the index schema are ignored.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub boosts: HashMap<FieldName, f32>,
    pub filters: HashMap<FieldName, String>,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            boosts: HashMap::new(),
            filters: HashMap::new(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}
