use tantivy::{Index, IndexReader, TantivyDocument};
use tracing::debug;

use faqrag_core::error::{Error, Result};
use faqrag_core::types::Document;

use crate::tantivy_utils::{build_schema, register_tokenizer, IndexFields};

/// An in-memory index over a flattened corpus.
///
/// Built once via [`SearchIndex::fit`] and read-only afterward; updating the
/// data means fitting a fresh index. The corpus is owned by the index so
/// queries can return full documents, not just scores: each tantivy document
/// carries only a stored ordinal pointing back into `corpus`.
pub struct SearchIndex {
    pub(crate) index: Index,
    pub(crate) reader: IndexReader,
    pub(crate) corpus: Vec<Document>,
    pub(crate) fields: IndexFields,
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("corpus_len", &self.corpus.len())
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl SearchIndex {
    /// Fit an index over `corpus` with the declared schema.
    ///
    /// `text_fields` are tokenized and relevance-scored; `keyword_fields` are
    /// indexed raw for exact-match filtering. The two sets must be disjoint.
    /// A document with no value for a declared text field indexes the empty
    /// string; no value for a declared keyword field means filters on that
    /// field never match it. Neither case fails the build.
    pub fn fit(corpus: Vec<Document>, text_fields: &[&str], keyword_fields: &[&str]) -> Result<Self> {
        for name in keyword_fields {
            if text_fields.contains(name) {
                return Err(Error::Schema(format!(
                    "field declared as both text and keyword: {name}"
                )));
            }
        }
        let (schema, fields) = build_schema(text_fields, keyword_fields);
        let index = Index::create_in_ram(schema);
        register_tokenizer(&index);

        let mut index_writer = index.writer(50_000_000).map_err(engine_err)?;
        for (ord, document) in corpus.iter().enumerate() {
            let mut doc = TantivyDocument::default();
            for (name, field) in &fields.text {
                doc.add_text(*field, document.field(name).unwrap_or(""));
            }
            for (name, field) in &fields.keyword {
                if let Some(value) = document.field(name) {
                    doc.add_text(*field, value);
                }
            }
            doc.add_u64(fields.ord, ord as u64);
            index_writer.add_document(doc).map_err(engine_err)?;
        }
        index_writer.commit().map_err(engine_err)?;
        let reader = index.reader().map_err(engine_err)?;
        debug!("fitted in-memory index over {} documents", corpus.len());

        Ok(Self { index, reader, corpus, fields })
    }

    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}

pub(crate) fn engine_err(e: tantivy::TantivyError) -> Error {
    Error::Operation(e.to_string())
}
