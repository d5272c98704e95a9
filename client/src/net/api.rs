//! HTTP calls to the completion gateway.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`HttpTransport`] reports itself unavailable, which keeps
//! the crate testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reduced to a [`CompletionFailure`], logged once by
//! [`run_round_trip`], and handed to the conversation reducer as an event so
//! the page can show it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;
use std::future::Future;

use super::types::CompletionRequest;
#[cfg(any(test, feature = "csr"))]
use super::types::CompletionResponse;
use crate::state::conversation::Event;

pub const COMPLETION_ENDPOINT: &str = "/api/completion";

/// Why a round trip produced no reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompletionFailure {
    /// The request never got a response (offline, aborted, not in a browser).
    Network(String),
    /// The gateway answered with a non-success status.
    Status { status: u16, message: Option<String> },
    /// A success status came back with a body that is not a reply.
    Decode(String),
}

impl fmt::Display for CompletionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(reason) => write!(f, "network error: {reason}"),
            Self::Status { status, message: Some(message) } => write!(f, "{message} (status {status})"),
            Self::Status { status, message: None } => write!(f, "request failed with status {status}"),
            Self::Decode(reason) => write!(f, "unreadable response: {reason}"),
        }
    }
}

/// Anything that can turn a query into completion text.
pub trait CompletionTransport {
    /// Send one query and return the reply text.
    fn complete(&self, request: &CompletionRequest) -> impl Future<Output = Result<String, CompletionFailure>>;
}

/// Transport that posts to [`COMPLETION_ENDPOINT`] on the page's origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl CompletionTransport for HttpTransport {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionFailure> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(COMPLETION_ENDPOINT)
                .json(request)
                .map_err(|e| CompletionFailure::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| CompletionFailure::Network(e.to_string()))?;
            let status = resp.status();
            if !resp.ok() {
                let message = resp
                    .json::<CompletionResponse>()
                    .await
                    .ok()
                    .and_then(CompletionResponse::into_error);
                return Err(CompletionFailure::Status { status, message });
            }
            let body: CompletionResponse = resp
                .json()
                .await
                .map_err(|e| CompletionFailure::Decode(e.to_string()))?;
            reply_text(body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(CompletionFailure::Network("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "csr"))]
fn reply_text(body: CompletionResponse) -> Result<String, CompletionFailure> {
    match body {
        CompletionResponse::Reply { response } => Ok(response),
        CompletionResponse::Error { error } => Err(CompletionFailure::Decode(error)),
    }
}

/// Run one round trip and turn the outcome into a reducer event.
pub async fn run_round_trip<T: CompletionTransport>(transport: &T, request: CompletionRequest) -> Event {
    match transport.complete(&request).await {
        Ok(response) => Event::Completed { response },
        Err(err) => {
            log::error!("completion round trip failed: {err}");
            Event::Failed { reason: err.to_string() }
        }
    }
}
