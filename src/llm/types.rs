//! Completion API vocabulary shared by the client and its callers.
//!
//! DESIGN
//! ======
//! The gateway only ever sends a single user message and reads back one
//! reply, so [`Role`] has one variant and [`ChatResponse`] keeps just the
//! text plus the metadata worth logging.

use serde::{Deserialize, Serialize};

/// Why a completion call failed.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("invalid LLM config: {0}")]
    InvalidConfig(String),

    /// Raised per call, not at startup.
    #[error("no API key: {var} is unset")]
    MissingApiKey { var: String },

    /// Transport failure before any status arrived.
    #[error("completion API unreachable: {0}")]
    Unreachable(String),

    /// Non-2xx from upstream. `body` is kept for logs only.
    #[error("completion API answered {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("malformed completion reply: {0}")]
    MalformedReply(String),

    #[error("could not build HTTP client: {0}")]
    ClientBuild(String),
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "E_LLM_CONFIG",
            Self::MissingApiKey { .. } => "E_LLM_NO_KEY",
            Self::Unreachable(_) => "E_LLM_UNREACHABLE",
            Self::UpstreamStatus { .. } => "E_LLM_STATUS",
            Self::MalformedReply(_) => "E_LLM_MALFORMED",
            Self::ClientBuild(_) => "E_LLM_CLIENT",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::Unreachable(_) => true,
            Self::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Author of an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// One chat message as the completions endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// First choice of a completion, with usage for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub text: String,
    pub model: String,
    pub finish_reason: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Seam between the gateway and the completion API; stubbed in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// # Errors
    ///
    /// Any [`LlmError`]; the gateway maps all of them to the same 500.
    async fn chat(&self, messages: &[Message]) -> Result<ChatResponse, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
