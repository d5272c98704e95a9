//! LLM configuration parsed from environment variables.

use super::types::LlmError;
use crate::config::non_empty;

pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Limits applied to every outbound completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    /// Env var the key is read from. Reported when the key is missing.
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub model: String,
    /// No trailing slash.
    pub openai_base_url: String,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Read the completion client settings from the process environment.
    ///
    /// | Var | Default |
    /// |---|---|
    /// | `LLM_API_KEY_ENV` | `OPENAI_API_KEY` (names the key var) |
    /// | `LLM_MODEL` | `gpt-3.5-turbo` |
    /// | `LLM_OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    /// | `LLM_REQUEST_TIMEOUT_SECS` | `120` |
    /// | `LLM_CONNECT_TIMEOUT_SECS` | `10` |
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the base URL is not http(s).
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LlmConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the base URL is not http(s).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let setting = |key: &str, default: &str| non_empty(lookup(key)).unwrap_or_else(|| default.to_owned());
        let seconds = |key: &str, default: u64| {
            lookup(key)
                .and_then(|raw| raw.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        let api_key_env = setting("LLM_API_KEY_ENV", DEFAULT_API_KEY_ENV);
        let openai_base_url = setting("LLM_OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        if !["http://", "https://"]
            .iter()
            .any(|scheme| openai_base_url.starts_with(scheme))
        {
            return Err(LlmError::InvalidConfig(format!(
                "LLM_OPENAI_BASE_URL must be an http(s) URL, got '{openai_base_url}'"
            )));
        }

        Ok(Self {
            api_key: non_empty(lookup(&api_key_env)),
            api_key_env,
            model: setting("LLM_MODEL", DEFAULT_MODEL),
            openai_base_url,
            timeouts: LlmTimeouts {
                request_secs: seconds("LLM_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
                connect_secs: seconds("LLM_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            },
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
