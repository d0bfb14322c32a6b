//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use futures_util::stream::{self, BoxStream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ai::{AiError, SseParser, TextGenerator};
use crate::domain::chat::ChatTurn;
use crate::models::config::AiConfig;

pub struct OpenAiGenerator {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiGenerator {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            client: Client::new(),
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    async fn post_completion(
        &self,
        messages: Vec<WireMessage>,
        stream: bool,
    ) -> Result<reqwest::Response, AiError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            stream,
            temperature: 0.7,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, system: &str, user: &str) -> Result<String, AiError> {
        let messages = vec![
            WireMessage {
                role: "system".to_string(),
                content: system.to_string(),
            },
            WireMessage {
                role: "user".to_string(),
                content: user.to_string(),
            },
        ];

        let response: CompletionResponse =
            self.post_completion(messages, false).await?.json().await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .map(|m| m.content)
            .ok_or(AiError::Empty)
    }

    async fn stream_chat(
        &self,
        system: &str,
        history: &[ChatTurn],
    ) -> Result<BoxStream<'static, Result<String, AiError>>, AiError> {
        let mut messages = vec![WireMessage {
            role: "system".to_string(),
            content: system.to_string(),
        }];
        messages.extend(history.iter().map(|turn| WireMessage {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
        }));

        let response = self.post_completion(messages, true).await?;

        let mut parser = SseParser::new();
        let mut pending: Vec<u8> = Vec::new();
        let deltas = response
            .bytes_stream()
            .map(move |chunk| match chunk {
                Ok(bytes) => {
                    pending.extend_from_slice(&bytes);
                    let text = take_utf8_prefix(&mut pending);
                    let deltas: Vec<Result<String, AiError>> = parser
                        .feed(&text)
                        .iter()
                        .filter_map(|payload| extract_delta(payload))
                        .map(Ok)
                        .collect();
                    deltas
                }
                Err(err) => vec![Err(AiError::Http(err))],
            })
            .flat_map(stream::iter)
            .boxed();

        Ok(deltas)
    }
}

/// Drains the decodable prefix of the buffer, leaving an incomplete trailing
/// UTF-8 sequence in place for the next network chunk.
fn take_utf8_prefix(buffer: &mut Vec<u8>) -> String {
    match std::str::from_utf8(buffer) {
        Ok(text) => {
            let text = text.to_string();
            buffer.clear();
            text
        }
        Err(err) if err.error_len().is_none() => {
            let rest = buffer.split_off(err.valid_up_to());
            let text = String::from_utf8_lossy(buffer).into_owned();
            *buffer = rest;
            text
        }
        Err(_) => {
            // Invalid bytes mid-buffer; replace them and move on.
            let text = String::from_utf8_lossy(buffer).into_owned();
            buffer.clear();
            text
        }
    }
}

fn extract_delta(payload: &str) -> Option<String> {
    let chunk: StreamChunk = serde_json::from_str(payload).ok()?;
    let content = chunk.choices.into_iter().next()?.delta?.content?;
    if content.is_empty() {
        return None;
    }
    Some(content)
}

/// System prompt for the enhance-email generator: the model must answer
/// with a subject line followed by the body, separated by a blank line.
pub const ENHANCE_EMAIL_SYSTEM: &str = "You are a sales copywriter. Improve the given outreach email. \
Reply with the subject line on the first line, then a blank line, then the email body as HTML. \
Do not add commentary.";

pub fn chat_system_prompt(user_name: &str) -> String {
    format!(
        "You are a CRM assistant helping {user_name}. Answer questions about leads, \
accounts, opportunities and quotes concisely. If you do not know, say so."
    )
}

/// Splits an enhance-email completion into its subject/body halves.
pub fn split_subject_body(completion: &str) -> (String, String) {
    match completion.split_once('\n') {
        Some((subject, body)) => (
            subject.trim().trim_start_matches("Subject:").trim().to_string(),
            body.trim().to_string(),
        ),
        None => (completion.trim().to_string(), String::new()),
    }
}

#[derive(Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    stream: bool,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<WireMessage>,
}

#[derive(Deserialize)]
struct StreamChunk {
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<Delta>,
}

#[derive(Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_delta_reads_content() {
        let payload = r#"{"choices":[{"delta":{"content":"Hel"}}]}"#;
        assert_eq!(extract_delta(payload), Some("Hel".to_string()));
    }

    #[test]
    fn test_extract_delta_skips_empty_and_finish_chunks() {
        assert_eq!(
            extract_delta(r#"{"choices":[{"delta":{"content":""}}]}"#),
            None
        );
        assert_eq!(
            extract_delta(r#"{"choices":[{"delta":{},"finish_reason":"stop"}]}"#),
            None
        );
        assert_eq!(extract_delta("not json"), None);
    }

    #[test]
    fn test_take_utf8_prefix_survives_split_multibyte_chars() {
        // "é" is 0xC3 0xA9; split it across two chunks.
        let mut buffer = vec![b'c', b'a', b'f', 0xC3];
        assert_eq!(take_utf8_prefix(&mut buffer), "caf");
        assert_eq!(buffer, vec![0xC3]);

        buffer.push(0xA9);
        assert_eq!(take_utf8_prefix(&mut buffer), "é");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_split_subject_body() {
        let (subject, body) = split_subject_body("Subject: Hello there\n\n<p>Hi</p>");
        assert_eq!(subject, "Hello there");
        assert_eq!(body, "<p>Hi</p>");

        let (subject, body) = split_subject_body("Just a subject");
        assert_eq!(subject, "Just a subject");
        assert_eq!(body, "");
    }
}
