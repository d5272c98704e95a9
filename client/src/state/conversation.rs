//! Conversation state and its reducer.
//!
//! DESIGN
//! ======
//! The message log is append-only and only grows through [`ConversationState::apply`]
//! after a successful round trip, two entries at a time (user, then
//! assistant). The phase is a tagged enum, and `begin_submit` is the only way
//! into `Submitting`, so a second submission while one is in flight cannot
//! be expressed.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::types::CompletionRequest;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// Label shown in front of the message text.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

/// One exchanged message. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { sender: Sender::Assistant, text: text.into() }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Round-trip phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Accepting input; submit enabled.
    #[default]
    Idle,
    /// A request for `query` is in flight; submit disabled.
    Submitting { query: String },
}

/// Inputs to the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The user edited the draft.
    DraftEdited(String),
    /// The in-flight request returned completion text.
    Completed { response: String },
    /// The in-flight request failed.
    Failed { reason: String },
}

/// Page-session conversation state. Reset only by reloading the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft: String,
    phase: Phase,
    notice: Option<String>,
}

impl ConversationState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    /// Failure message from the last round trip, if it failed.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Move to `Submitting` and return the request to send.
    ///
    /// Returns `None`, leaving state untouched, when the trimmed draft is
    /// empty or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<CompletionRequest> {
        if self.is_submitting() || self.draft.trim().is_empty() {
            return None;
        }
        let query = self.draft.clone();
        self.phase = Phase::Submitting { query: query.clone() };
        self.notice = None;
        Some(CompletionRequest { query })
    }

    /// Apply one event. Completion events arriving while idle are stale and
    /// ignored.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::DraftEdited(text) => self.draft = text,
            Event::Completed { response } => {
                let Phase::Submitting { query } = std::mem::take(&mut self.phase) else {
                    return;
                };
                self.messages.push(Message::user(query));
                self.messages.push(Message::assistant(response));
                self.draft.clear();
            }
            Event::Failed { reason } => {
                if !self.is_submitting() {
                    return;
                }
                self.phase = Phase::Idle;
                self.notice = Some(reason);
            }
        }
    }
}
