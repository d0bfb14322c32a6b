//! AI text generation behind a provider trait.
//!
//! Routes and services depend on [`TextGenerator`] only; the OpenAI-compatible
//! HTTP client lives in [`openai`]. Streaming responses arrive as
//! server-sent events, parsed incrementally by [`SseParser`] so a data line
//! split across two network chunks still comes out whole.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::domain::chat::ChatTurn;

pub mod openai;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("AI provider returned an error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("AI provider returned no content")]
    Empty,
}

/// Provider-agnostic text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One-shot completion. Returns the full assistant message.
    async fn generate(&self, system: &str, user: &str) -> Result<String, AiError>;

    /// Streaming completion over a conversation history. Yields text deltas
    /// as they arrive.
    async fn stream_chat(
        &self,
        system: &str,
        history: &[ChatTurn],
    ) -> Result<BoxStream<'static, Result<String, AiError>>, AiError>;
}

/// Incremental server-sent-events parser.
///
/// Feed it raw chunks as they come off the wire; it buffers partial lines
/// and returns complete `data:` payloads. The `[DONE]` sentinel is dropped.
#[derive(Default)]
pub struct SseParser {
    buffer: String,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        self.buffer.push_str(chunk);

        let mut payloads = Vec::new();
        while let Some(newline) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=newline).collect();
            let line = line.trim_end_matches(['\n', '\r']);

            let Some(data) = line.strip_prefix("data:") else {
                continue;
            };
            let data = data.trim_start();
            if data.is_empty() || data == "[DONE]" {
                continue;
            }
            payloads.push(data.to_string());
        }

        payloads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_complete_events() {
        let mut parser = SseParser::new();
        let payloads = parser.feed("data: {\"a\":1}\n\ndata: {\"b\":2}\n\n");
        assert_eq!(payloads, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[test]
    fn test_buffers_split_lines() {
        let mut parser = SseParser::new();
        assert!(parser.feed("data: {\"par").is_empty());
        let payloads = parser.feed("tial\":true}\n");
        assert_eq!(payloads, vec!["{\"partial\":true}"]);
    }

    #[test]
    fn test_drops_done_sentinel_and_comments() {
        let mut parser = SseParser::new();
        let payloads = parser.feed(": keep-alive\ndata: {\"x\":1}\ndata: [DONE]\n");
        assert_eq!(payloads, vec!["{\"x\":1}"]);
    }

    #[test]
    fn test_handles_crlf() {
        let mut parser = SseParser::new();
        let payloads = parser.feed("data: hello\r\n");
        assert_eq!(payloads, vec!["hello"]);
    }
}
