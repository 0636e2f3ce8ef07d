//! Deterministic prompt rendering from retrieved documents.

use faqrag_core::error::{Error, Result};
use faqrag_core::types::Document;

/// Render the question and retrieved documents into a single prompt.
///
/// Each document contributes one labeled context block, in result order; the
/// blocks are embedded with the literal question into a fixed instructional
/// template. A document that cannot resolve a template field fails fast with
/// [`Error::MissingField`].
pub fn build_prompt(question: &str, results: &[Document]) -> Result<String> {
    let mut context = String::new();
    for document in results {
        let section = require(document, "section")?;
        let doc_question = require(document, "question")?;
        let answer = require(document, "text")?;
        context.push_str(&format!(
            "section: {section}\nquestion: {doc_question}\nanswer: {answer}\n\n"
        ));
    }

    let prompt = format!(
        "You're a teaching assistant. Answer the QUESTION based on the CONTEXT from the FAQ database.\n\
         Use only the facts from the CONTEXT when answering the QUESTION.\n\
         \n\
         QUESTION: {question}\n\
         \n\
         CONTEXT:\n\
         {context}"
    );
    Ok(prompt.trim().to_string())
}

fn require<'a>(document: &'a Document, name: &str) -> Result<&'a str> {
    document
        .field(name)
        .ok_or_else(|| Error::MissingField(name.to_string()))
}
