//! Completion API adapter.
//!
//! DESIGN
//! ======
//! Handlers see only [`LlmChat`]. [`LlmClient`] is the production
//! implementation: an OpenAI-compatible chat completions client pinned to
//! one model and configured once at startup.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
use openai::OpenAiClient;
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

/// Completion client bound to a single model.
pub struct LlmClient {
    inner: OpenAiClient,
    model: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Fails on a malformed base URL or if the HTTP client cannot be built.
    /// A missing key only surfaces when `chat` is called.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let LlmConfig { api_key_env, api_key, model, openai_base_url, timeouts } = config;
        let inner = OpenAiClient::new(api_key, api_key_env, openai_base_url, timeouts)?;
        Ok(Self { inner, model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.inner.has_api_key()
    }

    #[must_use]
    pub fn api_key_env(&self) -> &str {
        self.inner.api_key_env()
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner.chat(&self.model, messages).await
    }
}
