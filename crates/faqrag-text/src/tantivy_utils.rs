use tantivy::schema::{Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING};
use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tantivy::Index;

pub(crate) const TOKENIZER_NAME: &str = "text_with_stopwords";

/// Name of the stored field holding each document's position in the owned
/// corpus. Underscore-prefixed to stay clear of user-declared field names.
pub(crate) const ORD_FIELD: &str = "_ord";

#[derive(Debug)]
pub(crate) struct IndexFields {
    pub text: Vec<(String, Field)>,
    pub keyword: Vec<(String, Field)>,
    pub ord: Field,
}

pub(crate) fn build_schema(text_fields: &[&str], keyword_fields: &[&str]) -> (Schema, IndexFields) {
    let mut schema_builder = Schema::builder();
    let text_field_indexing = TextFieldIndexing::default()
        .set_tokenizer(TOKENIZER_NAME)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let text_options = TextOptions::default().set_indexing_options(text_field_indexing);

    let mut text = Vec::new();
    for name in text_fields {
        let field = schema_builder.add_text_field(name, text_options.clone());
        text.push(((*name).to_string(), field));
    }
    let mut keyword = Vec::new();
    for name in keyword_fields {
        // Raw (untokenized) term per value: exact match only, never scored.
        let field = schema_builder.add_text_field(name, STRING);
        keyword.push(((*name).to_string(), field));
    }
    let ord = schema_builder.add_u64_field(ORD_FIELD, STORED);
    (schema_builder.build(), IndexFields { text, keyword, ord })
}

pub(crate) fn register_tokenizer(index: &Index) {
    let stop_words = vec![
        "a","an","and","are","as","at","be","by","for","from","has","he","in","is","it","its","of","on","that","the","to","was","will","with","or","but","not","this","these","they","them","their","there","then","than","so","if","when","where","why","how","what","which","who","whom","whose","can","could","should","would","may","might","must","shall","do","does","did","have","had","having",
    ];
    let tokenizer = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(StopWordFilter::remove(stop_words.into_iter().map(|s| s.to_string())))
        .build();
    index.tokenizers().register(TOKENIZER_NAME, tokenizer);
}
