use serde::Serialize;
use serde_json::Value;

use crate::config::RequesterConfig;

use super::{
    extract::extract_json_array,
    prompt::{build_prompt, Language, Level, SYSTEM_PROMPT},
    question::{normalize_questions, QuizQuestion},
    transport::{ChatTransport, UreqTransport},
    QuizError,
};

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Generates quiz batches through a chat-completion endpoint.
///
/// Every call to [`QuizRequester::generate`] is one independent request with
/// no retries.
pub struct QuizRequester<T = UreqTransport> {
    config: RequesterConfig,
    transport: T,
}

impl QuizRequester<UreqTransport> {
    pub fn new(config: RequesterConfig) -> Self {
        Self::with_transport(config, UreqTransport)
    }
}

impl<T: ChatTransport> QuizRequester<T> {
    pub fn with_transport(config: RequesterConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn generate(
        &self,
        topic: &str,
        level: Level,
        language: Language,
    ) -> Result<Vec<QuizQuestion>, QuizError> {
        let prompt = build_prompt(topic, level, language);
        let request = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        log::info!(
            "requesting {} {} questions ({}) from {}",
            level,
            topic,
            language.name(),
            self.config.api_url
        );
        let reply = self
            .transport
            .post_json(&self.config.api_url, &self.config.api_key, &request)?;

        if !reply.is_success() {
            log::error!("API error ({}): {}", reply.status, reply.body);
            let body: Option<Value> = serde_json::from_str(&reply.body).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str());
            return Err(QuizError::service(reply.status, message));
        }

        let body: Value = serde_json::from_str(&reply.body)
            .map_err(|e| QuizError::Response(format!("response body is not JSON: {}", e)))?;
        let content = message_content(&body)?;

        let items = extract_json_array(content).map_err(|e| {
            log::error!("parse error: {:?}", e);
            log::debug!("raw content: {}", content);
            e
        })?;

        Ok(normalize_questions(&items))
    }
}

fn message_content(body: &Value) -> Result<&str, QuizError> {
    body.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .ok_or_else(|| QuizError::Response("no choices[0].message.content in response".to_string()))
}
