//! faqrag-llm
//!
//! Client for an OpenAI-compatible chat-completions service. One prompt in,
//! one generated answer out; no retries and no local state.

pub mod client;

pub use client::{ChatClient, DEFAULT_MODEL};
