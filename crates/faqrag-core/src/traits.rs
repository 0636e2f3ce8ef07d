use crate::error::Result;
use crate::types::{Document, SearchQuery};
use async_trait::async_trait;

pub trait Retriever: Send + Sync {
    fn retrieve(&self, query: &SearchQuery) -> Result<Vec<Document>>;
}

#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str, model_name: &str) -> Result<String>;
}
