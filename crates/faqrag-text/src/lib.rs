//! faqrag-text
//!
//! Tantivy-backed in-memory indexing and retrieval. `SearchIndex::fit` builds
//! the index once from a flattened corpus; `SearchIndex::search` serves
//! ranked, filtered queries against it. See the `index` and `search` modules.

pub mod index;
pub mod search;
mod tantivy_utils;

pub use index::SearchIndex;
