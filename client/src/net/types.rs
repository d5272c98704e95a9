//! Wire DTOs for the client/gateway boundary.
//!
//! DESIGN
//! ======
//! These mirror the gateway's JSON bodies. A response is either a reply or
//! an error object, so it is decoded as an untagged enum.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/completion`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub query: String,
}

/// Body returned by `POST /api/completion`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletionResponse {
    Reply { response: String },
    Error { error: String },
}

impl CompletionResponse {
    /// The error message, if this is an error body.
    #[must_use]
    pub fn into_error(self) -> Option<String> {
        match self {
            Self::Reply { .. } => None,
            Self::Error { error } => Some(error),
        }
    }
}
