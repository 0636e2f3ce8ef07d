use tantivy::collector::TopDocs;
use tantivy::query::{AllQuery, BooleanQuery, BoostQuery, Occur, Query, TermQuery};
use tantivy::schema::{IndexRecordOption, Value};
use tantivy::tokenizer::TokenStream;
use tantivy::{TantivyDocument, Term};
use tracing::debug;

use faqrag_core::error::{Error, Result};
use faqrag_core::traits::Retriever;
use faqrag_core::types::{Document, SearchQuery};

use crate::index::{engine_err, SearchIndex};
use crate::tantivy_utils::TOKENIZER_NAME;

impl SearchIndex {
    /// Run a ranked query and return the top `query.limit` documents.
    ///
    /// The query text is tokenized with the index's own analyzer and matched
    /// against every declared text field, each weighted by its boost (1.0
    /// when unlisted). Filters become required exact-match terms on keyword
    /// fields. Boosts and filters naming undeclared fields are ignored. An
    /// empty (or all-stop-word) query text matches every document with a
    /// constant score, so ordering falls back to corpus order.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Document>> {
        if query.limit == 0 {
            return Err(Error::Validation("limit must be a positive integer".to_string()));
        }

        let tokens = self.tokenize(&query.text)?;
        let mut clauses: Vec<(Occur, Box<dyn Query>)> = Vec::new();
        if tokens.is_empty() {
            clauses.push((Occur::Must, Box::new(AllQuery)));
        } else {
            let mut field_queries: Vec<Box<dyn Query>> = Vec::new();
            for (name, field) in &self.fields.text {
                let terms: Vec<Box<dyn Query>> = tokens
                    .iter()
                    .map(|token| {
                        Box::new(TermQuery::new(
                            Term::from_field_text(*field, token),
                            IndexRecordOption::WithFreqs,
                        )) as Box<dyn Query>
                    })
                    .collect();
                let boost = query.boosts.get(name).copied().unwrap_or(1.0);
                field_queries.push(Box::new(BoostQuery::new(
                    Box::new(BooleanQuery::union(terms)),
                    boost,
                )));
            }
            clauses.push((Occur::Must, Box::new(BooleanQuery::union(field_queries))));
        }
        for (name, field) in &self.fields.keyword {
            if let Some(value) = query.filters.get(name) {
                clauses.push((
                    Occur::Must,
                    Box::new(TermQuery::new(
                        Term::from_field_text(*field, value),
                        IndexRecordOption::Basic,
                    )),
                ));
            }
        }

        let searcher = self.reader.searcher();
        let top_docs = searcher
            .search(&BooleanQuery::new(clauses), &TopDocs::with_limit(query.limit))
            .map_err(engine_err)?;

        let mut results = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let stored: TantivyDocument = searcher.doc(doc_address).map_err(engine_err)?;
            let ord = stored
                .get_first(self.fields.ord)
                .and_then(|v| v.as_u64())
                .ok_or_else(|| Error::Operation("stored document missing ordinal".to_string()))?;
            let document = self
                .corpus
                .get(ord as usize)
                .ok_or_else(|| Error::Operation(format!("ordinal {ord} out of corpus range")))?;
            results.push(document.clone());
        }
        debug!("query matched {} of {} documents", results.len(), self.corpus.len());
        Ok(results)
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut analyzer = self
            .index
            .tokenizers()
            .get(TOKENIZER_NAME)
            .ok_or_else(|| Error::Operation(format!("tokenizer {TOKENIZER_NAME} not registered")))?;
        let mut tokens = Vec::new();
        let mut stream = analyzer.token_stream(text);
        while stream.advance() {
            tokens.push(stream.token().text.clone());
        }
        Ok(tokens)
    }
}

impl Retriever for SearchIndex {
    fn retrieve(&self, query: &SearchQuery) -> Result<Vec<Document>> {
        self.search(query)
    }
}
