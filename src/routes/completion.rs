//! Completion gateway route.
//!
//! DESIGN
//! ======
//! One stateless operation: validate the request, forward the query to the
//! completion API as a single user message, return the first choice's text.
//!
//! ERROR HANDLING
//! ==============
//! Failure causes stay distinct inside [`GatewayError`] so logs carry the
//! real reason, but the response contract folds bad JSON and every upstream
//! failure into one 500 body. Clients never see why the model call failed.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::ErrorCode;
use crate::llm::types::{LlmError, Message};
use crate::state::AppState;

pub const INVALID_CONTENT_TYPE_MESSAGE: &str = "Invalid content type";
pub const MISSING_QUERY_MESSAGE: &str = "Query is required";
pub const MALFORMED_REQUEST_MESSAGE: &str = "Invalid JSON data or OpenAI API error";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid content type: {0:?}")]
    InvalidContentType(Option<String>),
    #[error("query is required")]
    MissingQuery,
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),
    #[error("completion API error: {0}")]
    Upstream(#[from] LlmError),
}

impl GatewayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidContentType(_) | Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::InvalidJson(_) | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    #[must_use]
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidContentType(_) => INVALID_CONTENT_TYPE_MESSAGE,
            Self::MissingQuery => MISSING_QUERY_MESSAGE,
            Self::InvalidJson(_) | Self::Upstream(_) => MALFORMED_REQUEST_MESSAGE,
        }
    }
}

impl ErrorCode for GatewayError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidContentType(_) => "E_INVALID_CONTENT_TYPE",
            Self::MissingQuery => "E_MISSING_QUERY",
            Self::InvalidJson(_) => "E_INVALID_JSON",
            Self::Upstream(e) => e.error_code(),
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Upstream(e) if e.retryable())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.client_message() })).into_response()
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /api/completion`: forward one query to the completion API.
pub async fn handle_completion(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    match complete(&state, &headers, &body).await {
        Ok(text) => Json(CompletionResponse { response: text }).into_response(),
        Err(err) => {
            log_failure(&err);
            err.into_response()
        }
    }
}

async fn complete(state: &AppState, headers: &HeaderMap, body: &[u8]) -> Result<String, GatewayError> {
    require_json_content_type(headers)?;
    let payload: Value = serde_json::from_slice(body).map_err(|e| GatewayError::InvalidJson(e.to_string()))?;
    let query = extract_query(&payload)?;

    info!(query_len = query.len(), "completion: query received");
    let reply = state.llm.chat(&[Message::user(query)]).await?;
    info!(
        model = %reply.model,
        finish_reason = %reply.finish_reason,
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "completion: reply ready"
    );
    Ok(reply.text)
}

fn log_failure(err: &GatewayError) {
    if err.status().is_server_error() {
        error!(code = err.error_code(), retryable = err.retryable(), error = %err, "completion: request failed");
    } else {
        warn!(code = err.error_code(), error = %err, "completion: request rejected");
    }
}

pub(crate) fn require_json_content_type(headers: &HeaderMap) -> Result<(), GatewayError> {
    let raw = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    match raw {
        Some(value) if value.to_ascii_lowercase().contains("application/json") => Ok(()),
        other => Err(GatewayError::InvalidContentType(other.map(str::to_owned))),
    }
}

/// Pull a usable query out of the parsed body.
///
/// A literal `null` body has no fields to read and is malformed. Otherwise
/// absent and falsy values (`null`, `false`, `0`, `-0`, `""`) are a missing
/// query, and any other non-string value cannot be sent as message content.
pub(crate) fn extract_query(payload: &Value) -> Result<String, GatewayError> {
    if payload.is_null() {
        return Err(GatewayError::InvalidJson("body is null".to_owned()));
    }
    match payload.get("query") {
        None | Some(Value::Null | Value::Bool(false)) => Err(GatewayError::MissingQuery),
        Some(Value::String(s)) if s.is_empty() => Err(GatewayError::MissingQuery),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(GatewayError::MissingQuery),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(GatewayError::InvalidJson(format!("query must be a string, got {other}"))),
    }
}

#[cfg(test)]
#[path = "completion_test.rs"]
mod tests;
