//! Pure view model for the conversation history.
//!
//! Components render whatever [`render_conversation`] returns, so the
//! displayed content is a function of state alone.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use super::conversation::{Message, Phase};

pub const EMPTY_HISTORY: &str = "No messages.";
pub const SUBMIT_LABEL: &str = "Ask the AI";
pub const SUBMITTING_LABEL: &str = "Asking the AI...";

const CHARS_PER_ROW: usize = 50;
const MIN_ROWS: usize = 2;

/// One read-only message block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageBlock {
    /// `"{Sender}:\n{text}"`.
    pub body: String,
    /// Visible textarea rows.
    pub rows: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversationView {
    Empty,
    Messages(Vec<MessageBlock>),
}

pub fn render_conversation(messages: &[Message]) -> ConversationView {
    if messages.is_empty() {
        return ConversationView::Empty;
    }
    ConversationView::Messages(messages.iter().map(render_message).collect())
}

pub fn render_message(message: &Message) -> MessageBlock {
    MessageBlock {
        body: format!("{}:\n{}", message.sender().label(), message.text()),
        rows: message_rows(message.text()),
    }
}

/// Row heuristic: one row per 50 characters of text, at least two.
pub fn message_rows(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_ROW).max(MIN_ROWS)
}

pub fn submit_label(phase: &Phase) -> &'static str {
    match phase {
        Phase::Idle => SUBMIT_LABEL,
        Phase::Submitting { .. } => SUBMITTING_LABEL,
    }
}
