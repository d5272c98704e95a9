use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
    assert_eq!(cfg.api_key_env, DEFAULT_API_KEY_ENV);
    assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
    assert_eq!(cfg.model, "gpt-3.5-turbo");
    assert_eq!(cfg.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_missing_key_is_not_an_error() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[])).unwrap();
    assert!(cfg.api_key.is_none());
    assert_eq!(cfg.api_key_env, "OPENAI_API_KEY");
}

#[test]
fn from_lookup_blank_key_counts_as_missing() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "   ")])).unwrap();
    assert!(cfg.api_key.is_none());
}

#[test]
fn from_lookup_follows_key_indirection() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "secret"),
        ("OPENAI_API_KEY", "ignored"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key_env, "TEST_KEY");
    assert_eq!(cfg.api_key.as_deref(), Some("secret"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_MODEL", "gpt-4o-mini"),
        ("LLM_OPENAI_BASE_URL", "https://example.test/v1/"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.openai_base_url, "https://example.test/v1");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_bad_timeouts_fall_back_to_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
        ("LLM_CONNECT_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS);
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_OPENAI_BASE_URL", "ftp://example.test")])).unwrap_err();
    assert!(matches!(err, LlmError::InvalidConfig(msg) if msg.contains("LLM_OPENAI_BASE_URL")));
}
