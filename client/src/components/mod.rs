//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both components read and write the shared `RwSignal<ConversationState>`
//! provided by [`crate::app::App`].

pub mod conversation_panel;
pub mod prompt_box;
