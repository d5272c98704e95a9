//! OpenAI-compatible chat completions client.
//!
//! Posts to `{base_url}/chat/completions` and reduces the response to the
//! first choice's message content.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
}

impl OpenAiClient {
    /// Build the HTTP client. A missing key is accepted here and reported on
    /// each call instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest` client cannot be built.
    pub fn new(
        api_key: Option<String>,
        api_key_env: String,
        base_url: String,
        timeouts: LlmTimeouts,
    ) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::ClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, api_key_env, base_url })
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn api_key_env(&self) -> &str {
        &self.api_key_env
    }

    /// Send `messages` to `model` and return the first choice.
    ///
    /// # Errors
    ///
    /// `MissingApiKey` without touching the network when no key is set,
    /// otherwise whatever the round trip or the reply parsing produced.
    pub async fn chat(&self, model: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(LlmError::MissingApiKey { var: self.api_key_env.clone() });
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&CompletionRequest { model, messages })
            .send()
            .await
            .map_err(|e| LlmError::Unreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Unreachable(e.to_string()))?;
        if !status.is_success() {
            return Err(LlmError::UpstreamStatus { status: status.as_u16(), body });
        }
        parse_chat_completions_response(&body)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct CompletionReply {
    #[serde(default)]
    model: String,
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize, Default)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

/// Reduce a completions reply to its first choice. A missing choice or a
/// non-text `content` (null, refusal, tool call) is a malformed reply.
pub(crate) fn parse_chat_completions_response(body: &str) -> Result<ChatResponse, LlmError> {
    let reply: CompletionReply = serde_json::from_str(body).map_err(|e| LlmError::MalformedReply(e.to_string()))?;

    let choice = reply
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedReply("no choices in reply".to_owned()))?;
    let text = choice
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| LlmError::MalformedReply("first choice has no text content".to_owned()))?;

    let usage = reply.usage.unwrap_or_default();
    Ok(ChatResponse {
        text,
        model: reply.model,
        finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_owned()),
        input_tokens: usage.prompt_tokens,
        output_tokens: usage.completion_tokens,
    })
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
