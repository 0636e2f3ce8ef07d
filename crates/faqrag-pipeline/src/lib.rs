//! faqrag-pipeline
//!
//! Composes retrieval, prompt rendering, and completion into the linear
//! answer flow: retrieve the top documents for a question, render them into
//! a prompt, forward the prompt to the completion backend. No retries and no
//! state between calls.

pub mod prompt;

use faqrag_core::error::Result;
use faqrag_core::traits::{Completer, Retriever};
use faqrag_core::types::SearchQuery;

pub use prompt::build_prompt;

pub struct RagPipeline<R>
where
    R: Retriever,
{
    retriever: R,
    completer: Box<dyn Completer>,
    model: String,
}

impl<R> RagPipeline<R>
where
    R: Retriever,
{
    pub fn new(retriever: R, completer: Box<dyn Completer>, model: impl Into<String>) -> Self {
        Self { retriever, completer, model: model.into() }
    }

    /// Answer the query's question from the indexed corpus.
    ///
    /// The query text doubles as the question embedded in the prompt.
    pub async fn answer(&self, query: &SearchQuery) -> Result<String> {
        let results = self.retriever.retrieve(query)?;
        let prompt = build_prompt(&query.text, &results)?;
        self.completer.complete(&prompt, &self.model).await
    }
}
