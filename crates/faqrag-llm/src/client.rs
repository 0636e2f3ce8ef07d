//! Chat-completions gateway via an OpenAI-compatible API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use faqrag_core::error::{Error, Result};
use faqrag_core::traits::Completer;

/// Model used when the caller does not select one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

const COMPLETIONS_PATH: &str = "/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Client for a remote chat-completions service.
///
/// The client is an explicit dependency of whatever composes the pipeline;
/// there is no shared global instance. Transport, auth, and quota failures
/// surface as [`Error::Gateway`] with no retry — retry policy belongs to the
/// caller.
pub struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(endpoint: &str, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Gateway(e.to_string()))?;
        let endpoint = endpoint.trim_end_matches('/').to_string();
        debug!("chat client configured: endpoint={}", endpoint);
        Ok(Self { client, endpoint, api_key })
    }

    /// Send `prompt` as the sole user message and return the first choice's
    /// text content.
    pub async fn complete(&self, prompt: &str, model_name: &str) -> Result<String> {
        let request = ChatRequest {
            model: model_name.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let mut call = self
            .client
            .post(format!("{}{}", self.endpoint, COMPLETIONS_PATH))
            .json(&request);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        let response = call.send().await.map_err(|e| Error::Gateway(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Gateway(format!("{status}: {body}")));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::Gateway(e.to_string()))?;
        debug!("completion received ({} choices)", chat_response.choices.len());
        chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Gateway("response contained no choices".to_string()))
    }
}

#[async_trait]
impl Completer for ChatClient {
    async fn complete(&self, prompt: &str, model_name: &str) -> Result<String> {
        ChatClient::complete(self, prompt, model_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_client_trailing_slash_trimmed() {
        let client = ChatClient::new("http://localhost:8080/", None).unwrap();
        assert_eq!(client.endpoint, "http://localhost:8080");
    }

    #[test]
    fn test_request_format() {
        let request = ChatRequest {
            model: DEFAULT_MODEL.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "QUESTION: enroll".to_string(),
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "QUESTION: enroll");
    }

    #[test]
    fn test_response_parsing() {
        let json = serde_json::json!({
            "choices": [{
                "message": { "content": "Fill the form." }
            }]
        });
        let response: ChatResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.choices[0].message.content, "Fill the form.");
    }

    #[test]
    fn test_response_parsing_ignores_extra_keys() {
        let json = serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "ok" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12 }
        });
        let response: ChatResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.choices[0].message.content, "ok");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_gateway_error() {
        let client = ChatClient::new("http://127.0.0.1:59999", None).unwrap();
        let err = client.complete("hello", DEFAULT_MODEL).await.unwrap_err();
        assert!(matches!(err, Error::Gateway(_)), "got: {err}");
    }

    #[test]
    fn test_empty_choice_list_parses() {
        let json = serde_json::json!({ "choices": [] });
        let response: ChatResponse = serde_json::from_value(json).unwrap();
        assert!(response.choices.is_empty());
    }
}
